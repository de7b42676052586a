//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::bearer::BearerError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Message returned to clients for every authentication failure
pub const UNAUTHORIZED: &str = "Unauthorized";

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No Authorization header
    #[error("Missing bearer token")]
    MissingToken,

    /// Authorization header present but not `Bearer <token>`
    #[error("Malformed Authorization header")]
    MalformedHeader,

    /// Bad signature, unknown, expired or revoked token
    #[error("Token invalid or expired")]
    TokenInvalid,

    /// Token resolves to a user that no longer exists
    #[error("User not found")]
    UserNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingToken
            | AuthError::MalformedHeader
            | AuthError::TokenInvalid
            | AuthError::UserNotFound => ErrorKind::Unauthorized,
            AuthError::Database(e) => AppError::from_sqlx(e).kind(),
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Convert to AppError
    ///
    /// Authentication failures share one client-facing message so callers
    /// cannot tell which check failed.
    pub fn to_app_error(&self) -> AppError {
        match (self, self.kind()) {
            (AuthError::Database(e), _) => AppError::from_sqlx(e),
            (_, ErrorKind::Unauthorized) => AppError::unauthorized(UNAUTHORIZED),
            (_, kind) => AppError::new(kind, self.to_string()),
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::TokenInvalid | AuthError::UserNotFound => {
                tracing::warn!(error = %self, "Rejected bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<BearerError> for AuthError {
    fn from(err: BearerError) -> Self {
        match err {
            BearerError::Missing => AuthError::MissingToken,
            BearerError::Malformed => AuthError::MalformedHeader,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn test_auth_failures_are_unauthorized() {
        for err in [
            AuthError::MissingToken,
            AuthError::MalformedHeader,
            AuthError::TokenInvalid,
            AuthError::UserNotFound,
        ] {
            assert_eq!(err.status_code(), 401, "{err}");
            assert_eq!(err.to_app_error().message(), UNAUTHORIZED);
        }
    }

    #[test]
    fn test_internal_is_server_error() {
        let err = AuthError::Internal("boom".to_string());
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_database_outage_is_service_unavailable() {
        let err = AuthError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status_code(), 503);
        assert_eq!(err.to_app_error().status_code(), 503);

        let io = std::io::Error::other("connection refused");
        assert_eq!(AuthError::Database(sqlx::Error::Io(io)).status_code(), 503);
        assert_eq!(
            AuthError::Database(sqlx::Error::WorkerCrashed).status_code(),
            500
        );
    }

    #[test]
    fn test_bearer_error_conversion() {
        assert!(matches!(
            AuthError::from(BearerError::Missing),
            AuthError::MissingToken
        ));
        assert!(matches!(
            AuthError::from(BearerError::Malformed),
            AuthError::MalformedHeader
        ));
    }

    #[tokio::test]
    async fn test_into_response_envelope() {
        let response = AuthError::TokenInvalid.into_response();
        assert_eq!(response.status(), 401);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "error": "Unauthorized", "message": "Unauthorized" })
        );
    }
}
