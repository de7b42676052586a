//! Request Input
//!
//! Typed inputs built once from a sanitised, validated payload.
//! Checks run in a fixed order: field rules, expiry date, country.

use chrono::NaiveDate;
use kernel::validation::{Payload, Rule, RuleSet, rule::attribute_name};

use crate::domain::entity::payment_config::CardDetails;
use crate::domain::value_object::{
    card_number::{CARD_NUMBER_DIGITS, CardNumber},
    contact::ContactDetails,
    country::Country,
    expiry_date::ExpiryDate,
};
use crate::error::{AccountError, AccountResult};

const MAX_LEN: usize = 191;

/// Rules for the contact block shared by both resources
pub fn contact_rules() -> RuleSet {
    use Rule::*;

    RuleSet::new()
        .field("building_name", [Required, Str, Max(MAX_LEN)])
        .field("street_address1", [Required, Max(MAX_LEN)])
        .field("street_address2", [Max(MAX_LEN)])
        .field("street_address3", [Max(MAX_LEN)])
        .field("street_address4", [Max(MAX_LEN)])
        .field("postcode", [Required, Str, Min(5), Max(MAX_LEN)])
        .field("city", [Required, Str, Min(4), Max(MAX_LEN)])
        .field("country", [Required, Str, Min(4), Max(MAX_LEN)])
        .field("county", [Max(MAX_LEN)])
        .field("phone_number_extension", [Required, Min(2), Max(MAX_LEN)])
        .field("phone_number", [Required, Min(5), Max(MAX_LEN)])
        .field("mobile_number_extension", [Max(MAX_LEN)])
        .field("mobile_number", [Max(MAX_LEN)])
}

pub fn payment_config_rules() -> RuleSet {
    use Rule::*;

    RuleSet::new()
        .field("card_holder_name", [Required, Min(6), Max(MAX_LEN)])
        .field("card_number", [Required, Digits(CARD_NUMBER_DIGITS)])
        .field("expiry_date", [Required])
        .merge(contact_rules())
}

pub fn destroy_rules() -> RuleSet {
    RuleSet::new().field("choice", [Rule::Required, Rule::Boolean])
}

/// Validated address fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressInput {
    pub contact: ContactDetails,
}

impl AddressInput {
    pub fn parse(payload: Payload) -> AccountResult<Self> {
        let payload = payload.sanitised();
        check(&payload, &contact_rules())?;

        Ok(Self {
            contact: contact(&payload)?,
        })
    }
}

/// Validated payment config fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentConfigInput {
    pub card: CardDetails,
    pub billing: ContactDetails,
}

impl PaymentConfigInput {
    /// `today` decides whether the expiry month has passed
    pub fn parse(payload: Payload, today: NaiveDate) -> AccountResult<Self> {
        let payload = payload.sanitised();
        check(&payload, &payment_config_rules())?;

        let expiry_text = required_text(&payload, "expiry_date")?;
        let expiry = ExpiryDate::parse(&expiry_text).ok_or(AccountError::InvalidExpiryFormat)?;
        if expiry.is_past(today) {
            return Err(AccountError::ExpiryInPast);
        }

        let billing = contact(&payload)?;

        let card_number = CardNumber::parse(&required_text(&payload, "card_number")?)
            .ok_or_else(|| {
                violation(format!(
                    "The card number must be {CARD_NUMBER_DIGITS} digits."
                ))
            })?;

        Ok(Self {
            card: CardDetails {
                card_holder_name: required_text(&payload, "card_holder_name")?,
                card_number,
                expiry,
            },
            billing,
        })
    }
}

/// Destroy confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DestroyInput {
    pub confirmed: bool,
}

impl DestroyInput {
    pub fn parse(payload: Payload) -> AccountResult<Self> {
        let payload = payload.sanitised();
        check(&payload, &destroy_rules())?;

        let confirmed = payload
            .flag("choice")
            .ok_or_else(|| violation("The choice field must be true or false.".to_string()))?;
        Ok(Self { confirmed })
    }
}

fn check(payload: &Payload, rules: &RuleSet) -> AccountResult<()> {
    let violations = payload.violations(rules);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(AccountError::Validation(
            violations.into_iter().map(|v| v.message).collect(),
        ))
    }
}

fn violation(message: String) -> AccountError {
    AccountError::Validation(vec![message])
}

fn required_text(payload: &Payload, field: &str) -> AccountResult<String> {
    optional_text(payload, field)?.ok_or_else(|| {
        violation(format!("The {} field is required.", attribute_name(field)))
    })
}

/// Absent or null is `None`; present values must be strings or numbers
fn optional_text(payload: &Payload, field: &str) -> AccountResult<Option<String>> {
    match payload.get(field) {
        None => Ok(None),
        Some(_) => payload
            .text(field)
            .map(Some)
            .ok_or_else(|| violation(format!("The {} must be a string.", attribute_name(field)))),
    }
}

fn contact(payload: &Payload) -> AccountResult<ContactDetails> {
    let country = Country::parse(&required_text(payload, "country")?)
        .ok_or(AccountError::InvalidCountry)?;

    Ok(ContactDetails {
        building_name: required_text(payload, "building_name")?,
        street_address1: required_text(payload, "street_address1")?,
        street_address2: optional_text(payload, "street_address2")?,
        street_address3: optional_text(payload, "street_address3")?,
        street_address4: optional_text(payload, "street_address4")?,
        postcode: required_text(payload, "postcode")?,
        city: required_text(payload, "city")?,
        country,
        county: optional_text(payload, "county")?,
        phone_number_extension: required_text(payload, "phone_number_extension")?,
        phone_number: required_text(payload, "phone_number")?,
        mobile_number_extension: optional_text(payload, "mobile_number_extension")?,
        mobile_number: optional_text(payload, "mobile_number")?,
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn payload(value: Value) -> Payload {
        Payload::from_value(value).unwrap()
    }

    fn with(mut value: Value, field: &str, v: Value) -> Value {
        value.as_object_mut().unwrap().insert(field.to_string(), v);
        value
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
    }

    #[test]
    fn test_address_input() {
        let value = with(fixtures::address_json(), "county", json!("  "));
        let input = AddressInput::parse(payload(value)).unwrap();

        assert_eq!(input.contact.city, "London");
        assert_eq!(input.contact.country.as_str(), "United Kingdom");
        assert_eq!(input.contact.county, None);
    }

    #[test]
    fn test_address_missing_fields_reports_all() {
        let err = AddressInput::parse(payload(json!({ "city": "Ely" }))).unwrap_err();
        let AccountError::Validation(messages) = err else {
            panic!("expected validation error, got {err:?}");
        };
        assert!(messages.contains(&"The building name field is required.".to_string()));
        assert!(messages.contains(&"The city must be at least 4 characters.".to_string()));
        assert!(messages.contains(&"The phone number field is required.".to_string()));
    }

    #[test]
    fn test_county_length_is_limited() {
        let value = with(fixtures::address_json(), "county", json!("x".repeat(192)));
        let err = AddressInput::parse(payload(value)).unwrap_err();
        let AccountError::Validation(messages) = err else {
            panic!("expected validation error, got {err:?}");
        };
        assert_eq!(
            messages,
            vec!["The county may not be greater than 191 characters.".to_string()]
        );

        let value = with(fixtures::address_json(), "county", json!("Greater London"));
        let input = AddressInput::parse(payload(value)).unwrap();
        assert_eq!(input.contact.county.as_deref(), Some("Greater London"));
    }

    #[test]
    fn test_invalid_country() {
        let value = with(fixtures::address_json(), "country", json!("Atlantis"));
        let err = AddressInput::parse(payload(value)).unwrap_err();
        assert!(matches!(err, AccountError::InvalidCountry));
    }

    #[test]
    fn test_numeric_phone_number_is_accepted() {
        let value = with(fixtures::address_json(), "phone_number", json!(2079460000u64));
        let input = AddressInput::parse(payload(value)).unwrap();
        assert_eq!(input.contact.phone_number, "2079460000");
    }

    #[test]
    fn test_non_scalar_field_is_rejected() {
        let value = with(fixtures::address_json(), "street_address1", json!(true));
        let err = AddressInput::parse(payload(value)).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_payment_config_input() {
        let input =
            PaymentConfigInput::parse(payload(fixtures::payment_config_json()), today()).unwrap();
        assert_eq!(input.card.expiry, ExpiryDate::new(2099, 12).unwrap());
        assert_eq!(input.card.card_number.last_four(), "1111");
    }

    #[test]
    fn test_expiry_in_past() {
        let value = with(fixtures::payment_config_json(), "expiry_date", json!("2024-04"));
        let err = PaymentConfigInput::parse(payload(value), today()).unwrap_err();
        assert!(matches!(err, AccountError::ExpiryInPast));

        // current month is still valid
        let value = with(fixtures::payment_config_json(), "expiry_date", json!("2024-05"));
        assert!(PaymentConfigInput::parse(payload(value), today()).is_ok());
    }

    #[test]
    fn test_invalid_expiry_format() {
        let value = with(fixtures::payment_config_json(), "expiry_date", json!("05/24"));
        let err = PaymentConfigInput::parse(payload(value), today()).unwrap_err();
        assert!(matches!(err, AccountError::InvalidExpiryFormat));
    }

    #[test]
    fn test_expiry_checked_before_country() {
        let value = with(fixtures::payment_config_json(), "expiry_date", json!("2000-01"));
        let value = with(value, "country", json!("Atlantis"));
        let err = PaymentConfigInput::parse(payload(value), today()).unwrap_err();
        assert!(matches!(err, AccountError::ExpiryInPast));
    }

    #[test]
    fn test_card_number_rules() {
        let value = with(fixtures::payment_config_json(), "card_number", json!("4111"));
        let err = PaymentConfigInput::parse(payload(value), today()).unwrap_err();
        let AccountError::Validation(messages) = err else {
            panic!("expected validation error");
        };
        assert_eq!(messages, vec!["The card number must be 16 digits.".to_string()]);
    }

    #[test]
    fn test_destroy_input() {
        assert!(DestroyInput::parse(payload(json!({ "choice": true }))).unwrap().confirmed);
        assert!(!DestroyInput::parse(payload(json!({ "choice": false }))).unwrap().confirmed);
        assert!(DestroyInput::parse(payload(json!({ "choice": "1" }))).unwrap().confirmed);
        assert!(!DestroyInput::parse(payload(json!({ "choice": 0 }))).unwrap().confirmed);
    }

    #[test]
    fn test_destroy_requires_boolean_choice() {
        for value in [json!({}), json!({ "choice": "" }), json!({ "choice": "yes" })] {
            let err = DestroyInput::parse(payload(value.clone())).unwrap_err();
            assert_eq!(err.status_code(), 400, "{value}");
        }
    }
}
