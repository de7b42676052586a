//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod current_user;
pub mod issue_token;
pub mod resolve_principal;
pub mod token;

// Re-exports
pub use config::AuthConfig;
pub use current_user::CurrentUserUseCase;
pub use issue_token::{IssueTokenOutput, IssueTokenUseCase};
pub use resolve_principal::ResolvePrincipalUseCase;
pub use token::TokenSigner;
