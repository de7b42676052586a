//! Application Layer
//!
//! Use cases and request input parsing.

pub mod address;
pub mod config;
pub mod input;
pub mod payment_config;

// Re-exports
pub use address::AddressUseCase;
pub use config::AccountConfig;
pub use input::{AddressInput, DestroyInput, PaymentConfigInput};
pub use payment_config::PaymentConfigUseCase;
