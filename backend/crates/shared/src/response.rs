//! Response Envelope
//!
//! Every JSON response shares one of two shapes:
//! - success: `{"message": "...", "data": ...}` (`data` omitted when absent)
//! - failure: `{"error": "..." | ["...", ...], "message": "<reason phrase>"}`

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::app_error::AppError;

/// `error` field of the failure envelope
///
/// A single message for auth and business-rule failures,
/// the full violation list for validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Single(String),
    Many(Vec<String>),
}

impl std::fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorDetail::Single(message) => write!(f, "{message}"),
            ErrorDetail::Many(messages) => write!(f, "{}", messages.join(" ")),
        }
    }
}

/// Failure envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
    pub message: String,
}

impl From<&AppError> for ErrorEnvelope {
    fn from(err: &AppError) -> Self {
        let error = if !err.violations().is_empty() {
            ErrorDetail::Many(err.violations().to_vec())
        } else if err.is_server_error() {
            // Never leak storage details to clients
            ErrorDetail::Single(err.kind().as_str().to_string())
        } else {
            ErrorDetail::Single(err.message().to_string())
        };

        Self {
            error,
            message: err.kind().as_str().to_string(),
        }
    }
}

/// Success envelope
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub message: Cow<'static, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Success envelope paired with its status code
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    status: u16,
    body: Envelope<T>,
}

/// Envelope without a `data` field
pub type MessageResponse = ApiResponse<()>;

impl<T> ApiResponse<T> {
    /// 200 with a payload
    pub fn with_data(message: impl Into<Cow<'static, str>>, data: T) -> Self {
        Self {
            status: 200,
            body: Envelope {
                message: message.into(),
                data: Some(data),
            },
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &Envelope<T> {
        &self.body
    }
}

impl ApiResponse<()> {
    /// 200 with a message only
    pub fn ok(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            status: 200,
            body: Envelope {
                message: message.into(),
                data: None,
            },
        }
    }

    /// 201 with a message only
    pub fn created(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            status: 201,
            body: Envelope {
                message: message.into(),
                data: None,
            },
        }
    }
}

#[cfg(feature = "axum")]
impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
        (status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_only_envelope_omits_data() {
        let response = MessageResponse::created("Created");
        assert_eq!(response.status(), 201);

        let json = serde_json::to_value(response.body()).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "Created" }));
    }

    #[test]
    fn test_false_data_is_kept() {
        let response = ApiResponse::with_data("Successful", false);
        let json = serde_json::to_value(response.body()).unwrap();
        assert_eq!(json["data"], serde_json::json!(false));
    }

    #[test]
    fn test_error_envelope_shapes() {
        let single = ErrorEnvelope::from(&AppError::bad_request("Invalid country provided"));
        assert_eq!(
            serde_json::to_value(&single).unwrap(),
            serde_json::json!({ "error": "Invalid country provided", "message": "Bad Request" })
        );

        let many = ErrorEnvelope::from(&AppError::validation(vec![
            "The city field is required.".to_string(),
        ]));
        assert_eq!(
            serde_json::to_value(&many).unwrap(),
            serde_json::json!({ "error": ["The city field is required."], "message": "Bad Request" })
        );
    }

    #[test]
    fn test_server_error_detail_is_hidden() {
        let envelope = ErrorEnvelope::from(&AppError::internal("connection reset by db-01"));
        assert_eq!(
            envelope.error,
            ErrorDetail::Single("Internal Server Error".to_string())
        );
    }
}
