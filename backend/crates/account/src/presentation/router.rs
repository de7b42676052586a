//! Account Router
//!
//! Routes extract a [`kernel::principal::Principal`]; the bearer guard that
//! inserts it is layered on by the application.

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::domain::repository::{AddressRepository, PaymentConfigRepository};
use crate::infra::postgres::PgAccountRepository;
use crate::presentation::handlers::{self, AccountAppState};

/// Create the Account router with PostgreSQL repository
pub fn account_router(repo: PgAccountRepository, config: AccountConfig) -> Router {
    account_router_generic(repo, config)
}

/// Create a generic Account router for any repository implementation
pub fn account_router_generic<R>(repo: R, config: AccountConfig) -> Router
where
    R: AddressRepository + PaymentConfigRepository + Clone + Send + Sync + 'static,
{
    let state = AccountAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/addresses",
            get(handlers::list_addresses::<R>).post(handlers::create_address::<R>),
        )
        .route(
            "/addresses/{id}",
            axum::routing::put(handlers::update_address::<R>)
                .patch(handlers::update_address::<R>)
                .delete(handlers::delete_address::<R>),
        )
        .route(
            "/payment-configs",
            get(handlers::list_payment_configs::<R>).post(handlers::create_payment_config::<R>),
        )
        .route(
            "/payment-configs/{id}",
            axum::routing::put(handlers::update_payment_config::<R>)
                .patch(handlers::update_payment_config::<R>)
                .delete(handlers::delete_payment_config::<R>),
        )
        .with_state(state)
}
