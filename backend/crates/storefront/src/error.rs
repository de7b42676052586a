//! Storefront Client Errors

use thiserror::Error;

/// Client-side result type alias
pub type ClientResult<T> = Result<T, ClientError>;

/// Failures talking to the storefront API
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connection refused, TLS, timeout)
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Body was not the expected JSON
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Non-success status without a usable body
    #[error("API returned status: {0}")]
    Status(u16),
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}
