//! Contact Details
//!
//! Postal address and phone numbers shared by addresses and payment configs.

use crate::domain::value_object::country::Country;

/// Contact block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetails {
    pub building_name: String,
    pub street_address1: String,
    pub street_address2: Option<String>,
    pub street_address3: Option<String>,
    pub street_address4: Option<String>,
    pub postcode: String,
    pub city: String,
    pub country: Country,
    pub county: Option<String>,
    pub phone_number_extension: String,
    pub phone_number: String,
    pub mobile_number_extension: Option<String>,
    pub mobile_number: Option<String>,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn contact() -> ContactDetails {
        ContactDetails {
            building_name: "Flat 2".to_string(),
            street_address1: "10 Downing Street".to_string(),
            street_address2: None,
            street_address3: Some("Westminster".to_string()),
            street_address4: None,
            postcode: "SW1A 2AA".to_string(),
            city: "London".to_string(),
            country: Country::parse("United Kingdom").unwrap(),
            county: None,
            phone_number_extension: "+44".to_string(),
            phone_number: "2079460000".to_string(),
            mobile_number_extension: None,
            mobile_number: None,
        }
    }
}
