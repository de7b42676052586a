//! Account Error Types
//!
//! This module provides account-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Account-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// Account-specific error variants
#[derive(Debug, Error)]
pub enum AccountError {
    /// One or more field rules failed
    #[error("Validation failed: {}", .0.join(" "))]
    Validation(Vec<String>),

    /// `expiry_date` is not `YYYY-MM`
    #[error("Invalid expiry date format.")]
    InvalidExpiryFormat,

    /// Card expired before the current month
    #[error("Expiry date in the past.")]
    ExpiryInPast,

    /// Country not on the allowed list
    #[error("Invalid country provided")]
    InvalidCountry,

    /// No record with this ID
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Record belongs to another user
    #[error("Unauthorized")]
    NotOwner,

    /// Malformed request body
    #[error("{0}")]
    Request(AppError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::Validation(_)
            | AccountError::InvalidExpiryFormat
            | AccountError::ExpiryInPast
            | AccountError::InvalidCountry => ErrorKind::BadRequest,
            AccountError::NotFound(_) => ErrorKind::NotFound,
            AccountError::NotOwner => ErrorKind::Unauthorized,
            AccountError::Request(err) => err.kind(),
            AccountError::Database(e) => AppError::from_sqlx(e).kind(),
            AccountError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            AccountError::Validation(violations) => AppError::validation(violations.clone()),
            AccountError::Request(err) => AppError::new(err.kind(), err.message().to_string()),
            AccountError::Database(e) => AppError::from_sqlx(e),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AccountError::Database(e) => {
                tracing::error!(error = %e, "Account database error");
            }
            AccountError::Internal(msg) => {
                tracing::error!(message = %msg, "Account internal error");
            }
            AccountError::NotOwner => {
                tracing::warn!("Access to another user's record rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Account error");
            }
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AccountError {
    fn from(err: AppError) -> Self {
        if err.is_server_error() {
            AccountError::Internal(err.to_string())
        } else {
            AccountError::Request(err)
        }
    }
}
