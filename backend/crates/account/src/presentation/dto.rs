//! API DTOs (Data Transfer Objects)
//!
//! Records are serialised flat, with snake_case column names.

use chrono::{DateTime, Utc};
use kernel::id::{AddressId, PaymentConfigId, UserId};
use serde::{Deserialize, Serialize};

use crate::domain::entity::{address::Address, payment_config::PaymentConfig};
use crate::domain::value_object::contact::ContactDetails;

/// Contact block fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub building_name: String,
    pub street_address1: String,
    pub street_address2: Option<String>,
    pub street_address3: Option<String>,
    pub street_address4: Option<String>,
    pub postcode: String,
    pub city: String,
    pub country: String,
    pub county: Option<String>,
    pub phone_number_extension: String,
    pub phone_number: String,
    pub mobile_number_extension: Option<String>,
    pub mobile_number: Option<String>,
}

impl From<ContactDetails> for ContactResponse {
    fn from(c: ContactDetails) -> Self {
        Self {
            building_name: c.building_name,
            street_address1: c.street_address1,
            street_address2: c.street_address2,
            street_address3: c.street_address3,
            street_address4: c.street_address4,
            postcode: c.postcode,
            city: c.city,
            country: c.country.to_string(),
            county: c.county,
            phone_number_extension: c.phone_number_extension,
            phone_number: c.phone_number,
            mobile_number_extension: c.mobile_number_extension,
            mobile_number: c.mobile_number,
        }
    }
}

/// Address list item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressResponse {
    pub id: AddressId,
    pub user_id: UserId,
    #[serde(flatten)]
    pub contact: ContactResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Address> for AddressResponse {
    fn from(a: Address) -> Self {
        Self {
            id: a.id,
            user_id: a.user_id,
            contact: a.contact.into(),
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

/// Payment config list item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConfigResponse {
    pub id: PaymentConfigId,
    pub user_id: UserId,
    pub card_holder_name: String,
    pub card_number: String,
    pub expiry_month: u32,
    pub expiry_year: i32,
    #[serde(flatten)]
    pub billing: ContactResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PaymentConfig> for PaymentConfigResponse {
    fn from(p: PaymentConfig) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            card_holder_name: p.card.card_holder_name,
            card_number: p.card.card_number.as_str().to_string(),
            expiry_month: p.card.expiry.month(),
            expiry_year: p.card.expiry.year(),
            billing: p.billing.into(),
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}
