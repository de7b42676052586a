//! Domain Layer
//!
//! Contains entities and repository traits.

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::{access_token::AccessToken, user::User};
pub use repository::{AccessTokenRepository, UserRepository};
