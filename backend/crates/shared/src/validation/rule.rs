//! Field Rules
//!
//! Each rule inspects one field value and yields a human readable
//! violation message when it fails.

use serde_json::Value;

/// A single declarative field rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Present, not null, not blank
    Required,
    /// Must be a JSON string
    Str,
    /// Exactly `n` ASCII digits
    Digits(usize),
    /// At least `n` characters (items for arrays)
    Min(usize),
    /// At most `n` characters (items for arrays)
    Max(usize),
    /// `true`, `false`, `0`, `1`, `"0"` or `"1"`
    Boolean,
}

impl Rule {
    /// Implicit rules run even when the value is missing
    pub const fn is_implicit(&self) -> bool {
        matches!(self, Rule::Required)
    }

    /// Check `value` for `field`; `None` means the rule passed
    pub fn check(&self, field: &str, value: Option<&Value>) -> Option<String> {
        let attribute = attribute_name(field);

        let Some(value) = value.filter(|v| !is_blank(v)) else {
            return match self {
                Rule::Required => Some(format!("The {attribute} field is required.")),
                // Non-implicit rules skip missing values
                _ => None,
            };
        };

        match self {
            Rule::Required => None,
            Rule::Str => {
                (!value.is_string()).then(|| format!("The {attribute} must be a string."))
            }
            Rule::Digits(n) => {
                let ok = scalar_text(value)
                    .is_some_and(|s| s.len() == *n && s.bytes().all(|b| b.is_ascii_digit()));
                (!ok).then(|| format!("The {attribute} must be {n} digits."))
            }
            Rule::Min(n) => (size(value) < *n).then(|| {
                if value.is_array() {
                    format!("The {attribute} must have at least {n} items.")
                } else {
                    format!("The {attribute} must be at least {n} characters.")
                }
            }),
            Rule::Max(n) => (size(value) > *n).then(|| {
                if value.is_array() {
                    format!("The {attribute} may not have more than {n} items.")
                } else {
                    format!("The {attribute} may not be greater than {n} characters.")
                }
            }),
            Rule::Boolean => as_bool(value)
                .is_none()
                .then(|| format!("The {attribute} field must be true or false.")),
        }
    }
}

/// `street_address1` → `street address1`
pub fn attribute_name(field: &str) -> String {
    field.replace('_', " ")
}

/// Missing for the purpose of `required`
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Strings as-is, numbers in their decimal form
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Boolean coercion accepted by [`Rule::Boolean`]
pub fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(s) => match s.as_str() {
            "0" => Some(false),
            "1" => Some(true),
            _ => None,
        },
        _ => None,
    }
}

fn size(value: &Value) -> usize {
    match value {
        Value::String(s) => s.chars().count(),
        Value::Number(n) => n.to_string().chars().count(),
        Value::Array(items) => items.len(),
        Value::Object(map) => map.len(),
        Value::Bool(b) => usize::from(*b),
        Value::Null => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required() {
        assert_eq!(
            Rule::Required.check("building_name", None).as_deref(),
            Some("The building name field is required.")
        );
        assert!(Rule::Required.check("city", Some(&json!("   "))).is_some());
        assert!(Rule::Required.check("city", Some(&json!(null))).is_some());
        assert!(Rule::Required.check("choice", Some(&json!(false))).is_none());
    }

    #[test]
    fn test_optional_fields_skip_rules() {
        assert!(Rule::Max(191).check("street_address2", None).is_none());
        assert!(Rule::Str.check("county", Some(&json!(null))).is_none());
    }

    #[test]
    fn test_digits() {
        let rule = Rule::Digits(16);
        assert!(rule.check("card_number", Some(&json!("4111111111111111"))).is_none());
        assert!(rule.check("card_number", Some(&json!(4111111111111111u64))).is_none());
        assert_eq!(
            rule.check("card_number", Some(&json!("4111-1111-1111-11"))).as_deref(),
            Some("The card number must be 16 digits.")
        );
        assert!(rule.check("card_number", Some(&json!("411111111111111"))).is_some());
    }

    #[test]
    fn test_length_rules() {
        assert_eq!(
            Rule::Min(5).check("postcode", Some(&json!("AB1"))).as_deref(),
            Some("The postcode must be at least 5 characters.")
        );
        let long = "x".repeat(192);
        assert_eq!(
            Rule::Max(191).check("city", Some(&json!(long))).as_deref(),
            Some("The city may not be greater than 191 characters.")
        );
        // multi-byte characters count once
        assert!(Rule::Min(4).check("city", Some(&json!("Łódź"))).is_none());
    }

    #[test]
    fn test_string() {
        assert_eq!(
            Rule::Str.check("city", Some(&json!(1234))).as_deref(),
            Some("The city must be a string.")
        );
    }

    #[test]
    fn test_boolean() {
        for ok in [json!(true), json!(false), json!(0), json!(1), json!("0"), json!("1")] {
            assert!(Rule::Boolean.check("choice", Some(&ok)).is_none(), "{ok}");
        }
        assert_eq!(
            Rule::Boolean.check("choice", Some(&json!("yes"))).as_deref(),
            Some("The choice field must be true or false.")
        );
        assert!(Rule::Boolean.check("choice", Some(&json!(2))).is_some());
    }
}
