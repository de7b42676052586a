//! Address Entity

use chrono::{DateTime, Utc};
use kernel::id::{AddressId, UserId};

use crate::domain::entity::OwnedByUser;
use crate::domain::value_object::contact::ContactDetails;

/// Saved delivery address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub id: AddressId,
    pub user_id: UserId,
    pub contact: ContactDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Address not yet persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAddress {
    pub user_id: UserId,
    pub contact: ContactDetails,
}

impl Address {
    /// Replace the contact block
    pub fn apply(&mut self, contact: ContactDetails) {
        self.contact = contact;
        self.updated_at = Utc::now();
    }
}

impl OwnedByUser for Address {
    fn owner(&self) -> UserId {
        self.user_id
    }
}
