//! Auth Middleware
//!
//! Guard for protected routes: resolves the bearer token and inserts the
//! [`Principal`] into request extensions for downstream extractors.

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::principal::Principal;
use platform::bearer::extract_bearer;

use crate::application::ResolvePrincipalUseCase;
use crate::domain::repository::{AccessTokenRepository, UserRepository};
use crate::error::AuthResult;
use crate::presentation::handlers::AuthAppState;

/// Middleware that requires a valid bearer token
///
/// Use with `axum::middleware::from_fn_with_state`.
pub async fn require_principal<R>(
    State(state): State<AuthAppState<R>>,
    mut req: Request,
    next: Next,
) -> Response
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    match resolve(&state, req.headers()).await {
        Ok(principal) => {
            req.extensions_mut().insert(principal);
            next.run(req).await
        }
        Err(e) => e.into_response(),
    }
}

async fn resolve<R>(state: &AuthAppState<R>, headers: &HeaderMap) -> AuthResult<Principal>
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    let token = extract_bearer(headers)?;
    ResolvePrincipalUseCase::new(state.repo.clone(), state.config.clone())
        .execute(&token)
        .await
}
