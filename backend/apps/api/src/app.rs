//! Router Composition
//!
//! Mounts the auth and account routers; account routes sit behind the
//! bearer guard.

use account::AccountConfig;
use account::domain::repository::{AddressRepository, PaymentConfigRepository};
use auth::domain::repository::{AccessTokenRepository, UserRepository};
use auth::presentation::{AuthAppState, require_principal};
use axum::{Router, middleware};

pub fn build_router<A, R>(
    auth_state: AuthAppState<A>,
    account_repo: R,
    account_config: AccountConfig,
) -> Router
where
    A: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
    R: AddressRepository + PaymentConfigRepository + Clone + Send + Sync + 'static,
{
    let account = account::account_router_generic(account_repo, account_config).route_layer(
        middleware::from_fn_with_state(auth_state.clone(), require_principal::<A>),
    );

    Router::new()
        .merge(auth::presentation::router::routes(auth_state))
        .merge(account)
}
