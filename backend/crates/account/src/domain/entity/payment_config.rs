//! Payment Config Entity
//!
//! Stored card plus its billing contact details.

use chrono::{DateTime, Utc};
use kernel::id::{PaymentConfigId, UserId};

use crate::domain::entity::OwnedByUser;
use crate::domain::value_object::{
    card_number::CardNumber, contact::ContactDetails, expiry_date::ExpiryDate,
};

/// Card details entered by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDetails {
    pub card_holder_name: String,
    pub card_number: CardNumber,
    pub expiry: ExpiryDate,
}

/// Saved payment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentConfig {
    pub id: PaymentConfigId,
    pub user_id: UserId,
    pub card: CardDetails,
    pub billing: ContactDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payment config not yet persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPaymentConfig {
    pub user_id: UserId,
    pub card: CardDetails,
    pub billing: ContactDetails,
}

impl PaymentConfig {
    /// Replace card and billing details
    pub fn apply(&mut self, card: CardDetails, billing: ContactDetails) {
        self.card = card;
        self.billing = billing;
        self.updated_at = Utc::now();
    }
}

impl OwnedByUser for PaymentConfig {
    fn owner(&self) -> UserId {
        self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::contact::fixtures;
    use kernel::principal::Principal;

    fn config(owner: i64) -> PaymentConfig {
        let now = Utc::now();
        PaymentConfig {
            id: PaymentConfigId::new(1),
            user_id: UserId::new(owner),
            card: CardDetails {
                card_holder_name: "Ada Lovelace".to_string(),
                card_number: CardNumber::parse("4111111111111111").unwrap(),
                expiry: ExpiryDate::new(2099, 1).unwrap(),
            },
            billing: fixtures::contact(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_ownership() {
        let config = config(42);
        assert!(config.is_owned_by(&Principal::new(UserId::new(42))));
        assert!(!config.is_owned_by(&Principal::new(UserId::new(7))));
    }

    #[test]
    fn test_debug_hides_card_number() {
        let debug = format!("{:?}", config(42));
        assert!(!debug.contains("4111111111111111"));
    }
}
