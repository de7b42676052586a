//! Principal
//!
//! The authenticated user context resolved from a request's credentials.
//! The auth middleware inserts it into request extensions; handlers take it
//! as an extractor and pass it explicitly to use cases.

use crate::id::UserId;

/// Authenticated user context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub user_id: UserId,
}

impl Principal {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }

    /// Whether this principal owns a record belonging to `owner`
    pub fn owns(&self, owner: UserId) -> bool {
        self.user_id == owner
    }
}

#[cfg(feature = "axum")]
impl<S> axum::extract::FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = crate::error::app_error::AppError;

    async fn from_request_parts(
        parts: &mut http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .copied()
            .ok_or_else(|| crate::error::app_error::AppError::unauthorized("Unauthorized"))
    }
}
