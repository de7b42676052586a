//! Input sanitising
//!
//! Runs before validation: strings are trimmed and blank strings become `null`,
//! so optional fields submitted as `""` are stored as absent.

use serde_json::Value;

/// Sanitise a value in place, recursing into arrays and objects
pub fn sanitise(value: &mut Value) {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                *value = Value::Null;
            } else if trimmed.len() != s.len() {
                *s = trimmed.to_string();
            }
        }
        Value::Array(items) => items.iter_mut().for_each(sanitise),
        Value::Object(map) => map.values_mut().for_each(sanitise),
        _ => {}
    }
}
