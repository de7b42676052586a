//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{
    OwnedByUser,
    address::{Address, NewAddress},
    payment_config::{NewPaymentConfig, PaymentConfig},
};
pub use repository::{AddressRepository, PaymentConfigRepository};
