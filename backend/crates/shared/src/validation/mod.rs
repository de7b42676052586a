//! Request Validation
//!
//! Declarative per-field rules applied to a JSON request payload.
//! Every violation is collected so clients see all problems at once.
//!
//! ```rust
//! use kernel::validation::{Payload, Rule, RuleSet};
//!
//! let rules = RuleSet::new()
//!     .field("city", [Rule::Required, Rule::Str, Rule::Min(4), Rule::Max(191)])
//!     .field("postcode", [Rule::Required, Rule::Str, Rule::Min(5)]);
//!
//! let payload = Payload::from_body(br#"{"city": "Ely"}"#).unwrap();
//! let violations = payload.violations(&rules);
//! assert_eq!(violations.len(), 2);
//! ```

pub mod rule;
pub mod sanitise;

use serde_json::{Map, Value};

use crate::error::app_error::{AppError, AppResult};

pub use rule::Rule;

/// Ordered field → rules mapping
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    fields: Vec<(&'static str, Vec<Rule>)>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add rules for a field; fields are checked in insertion order
    pub fn field(mut self, name: &'static str, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.fields.push((name, rules.into_iter().collect()));
        self
    }

    /// Append every field of `other`
    pub fn merge(mut self, other: RuleSet) -> Self {
        self.fields.extend(other.fields);
        self
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &[Rule])> {
        self.fields.iter().map(|(name, rules)| (*name, rules.as_slice()))
    }
}

/// One failed rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// JSON object request body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Parse a raw request body; an empty body is an empty payload
    pub fn from_body(body: &[u8]) -> AppResult<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        let value: Value = serde_json::from_slice(body)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> AppResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::default()),
            _ => Err(AppError::bad_request("Request body must be a JSON object")),
        }
    }

    /// Trim strings and turn blank strings into `null`
    pub fn sanitised(self) -> Self {
        let mut value = Value::Object(self.0);
        sanitise::sanitise(&mut value);
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field).filter(|v| !v.is_null())
    }

    /// Field as text: strings as-is, numbers in decimal form
    pub fn text(&self, field: &str) -> Option<String> {
        self.get(field).and_then(rule::scalar_text)
    }

    /// Field coerced the way [`Rule::Boolean`] accepts it
    pub fn flag(&self, field: &str) -> Option<bool> {
        self.get(field).and_then(rule::as_bool)
    }

    /// Apply every rule and collect all violations
    pub fn violations(&self, rules: &RuleSet) -> Vec<Violation> {
        rules
            .fields()
            .flat_map(|(field, field_rules)| {
                let value = self.0.get(field);
                field_rules
                    .iter()
                    .filter_map(move |rule| rule.check(field, value))
                    .map(move |message| Violation { field, message })
            })
            .collect()
    }

    /// Fail with a 400 listing every violation
    pub fn validate(&self, rules: &RuleSet) -> AppResult<()> {
        let violations = self.violations(rules);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(
                violations.into_iter().map(|v| v.message).collect(),
            ))
        }
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn address_like_rules() -> RuleSet {
        RuleSet::new()
            .field("building_name", [Rule::Required, Rule::Str, Rule::Max(191)])
            .field("postcode", [Rule::Required, Rule::Str, Rule::Min(5), Rule::Max(191)])
            .field("street_address2", [Rule::Max(191)])
    }

    #[test]
    fn test_collects_all_violations_in_order() {
        let payload = Payload::from_value(json!({ "postcode": "AB1" })).unwrap();
        let violations = payload.violations(&address_like_rules());

        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "The building name field is required.",
                "The postcode must be at least 5 characters.",
            ]
        );
    }

    #[test]
    fn test_validate_returns_bad_request() {
        let payload = Payload::default();
        let err = payload.validate(&address_like_rules()).unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.violations().len(), 2);
    }

    #[test]
    fn test_valid_payload_passes() {
        let payload = Payload::from_value(json!({
            "building_name": "Flat 2",
            "postcode": "SW1A 1AA"
        }))
        .unwrap();
        assert!(payload.validate(&address_like_rules()).is_ok());
    }

    #[test]
    fn test_from_body() {
        assert_eq!(Payload::from_body(b"").unwrap(), Payload::default());
        assert_eq!(Payload::from_body(b"  \n").unwrap(), Payload::default());
        assert!(Payload::from_body(b"[1, 2]").is_err());
        assert_eq!(Payload::from_body(b"{not json").unwrap_err().status_code(), 400);
    }

    #[test]
    fn test_sanitised_blank_optional_is_absent() {
        let payload = Payload::from_value(json!({ "county": "  ", "city": " Leeds " }))
            .unwrap()
            .sanitised();
        assert_eq!(payload.text("county"), None);
        assert_eq!(payload.text("city").as_deref(), Some("Leeds"));
    }

    #[test]
    fn test_text_and_flag_coercion() {
        let payload = Payload::from_value(json!({
            "phone_number": 7700900123u64,
            "choice": "1"
        }))
        .unwrap();
        assert_eq!(payload.text("phone_number").as_deref(), Some("7700900123"));
        assert_eq!(payload.flag("choice"), Some(true));
        assert_eq!(payload.flag("missing"), None);
    }
}
