//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error types and the `{message, data|error}` response envelope
//! - Typed integer IDs for users, products and account resources
//! - Pagination shape shared by every listing endpoint
//! - Declarative request validation rules
//! - The authenticated [`principal::Principal`]
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
pub mod pagination;
pub mod principal;
pub mod response;
pub mod validation;
