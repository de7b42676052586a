//! Account (Addresses & Payment Configs) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Input validation and use cases
//! - `infra/` - PostgreSQL and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Owner-scoped CRUD for saved addresses and payment configs
//! - Listings paginated 10 per page
//! - Deletion gated on an explicit `choice` confirmation
//!
//! ## Access Model
//! - Every route requires a [`kernel::principal::Principal`]
//! - New records always belong to the caller, whatever the body says
//! - Updating or deleting another user's record is rejected with 401

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AccountConfig;
pub use error::{AccountError, AccountResult};
pub use infra::memory::MemoryAccountRepository;
pub use infra::postgres::PgAccountRepository;
pub use presentation::router::{account_router, account_router_generic};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
