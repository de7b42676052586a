//! Auth (Authorization Guard) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, repository traits
//! - `application/` - Use cases and token signing
//! - `infra/` - PostgreSQL and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, middleware, router
//!
//! ## Features
//! - Bearer access tokens resolved to a [`kernel::principal::Principal`]
//! - `require_principal` middleware guarding protected routes
//! - `GET /user/authenticate` returning the current user
//!
//! ## Security Model
//! - Token string is `<token_id>.<base64url(HMAC-SHA256(secret, token_id))>`
//! - Signatures are compared in constant time before any database lookup
//! - Expired or revoked tokens never resolve

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::memory::MemoryAuthRepository;
pub use infra::postgres::PgAuthRepository;
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
