//! API Models
//!
//! Shapes returned by the storefront API.

use kernel::id::{ProductId, UserId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{message, data?, error?}` response envelope
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
    /// A single message or a list of validation messages
    #[serde(default)]
    pub error: Option<Value>,
}

impl<T> Envelope<T> {
    /// Server-provided error text, `"Unknown error"` when there is none
    pub fn error_message(&self) -> String {
        match &self.error {
            Some(Value::String(message)) if !message.is_empty() => message.clone(),
            Some(Value::Array(messages)) if !messages.is_empty() => messages
                .iter()
                .map(|m| m.as_str().map_or_else(|| m.to_string(), str::to_string))
                .collect::<Vec<_>>()
                .join(" "),
            _ => "Unknown error".to_string(),
        }
    }
}

/// Authenticated user as returned by `/user/authenticate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub user_id: UserId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    /// Vendor that listed the product
    pub user_id: UserId,
    pub name: String,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub product_details: String,
    pub formatted_cost: String,
    #[serde(default)]
    pub shippable: bool,
    #[serde(default)]
    pub free_delivery: bool,
    #[serde(default)]
    pub reviews: Vec<Review>,
    /// Average review score
    #[serde(default, rename = "review")]
    pub review_score: Option<f64>,
}
