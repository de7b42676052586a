//! Storefront Client State
//!
//! Client-side half of the storefront: the API client, a single store
//! updated through actions, and the page logic that drives it.
//!
//! - `api` - [`api::StorefrontApi`] and its reqwest implementation
//! - `store` - actions, reducer, and the `watch`-backed [`store::Store`]
//! - `session` - loads the signed-in user from the stored token
//! - `product` - product page loading, view model, add to cart

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod product;
pub mod remote;
pub mod session;
pub mod store;
pub mod token;

pub use api::{HttpStorefrontApi, StorefrontApi};
pub use config::StorefrontConfig;
pub use error::{ClientError, ClientResult, ConfigError};
pub use product::{Affordance, ProductPage, ProductView};
pub use remote::Remote;
pub use session::get_current_user;
pub use store::{Action, Dispatch, Store, StoreState};
pub use token::{MemoryTokenStore, TokenStore};
