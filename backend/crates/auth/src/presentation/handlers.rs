//! HTTP Handlers

use axum::extract::State;
use kernel::principal::Principal;
use kernel::response::ApiResponse;
use std::sync::Arc;

use crate::application::CurrentUserUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::{AccessTokenRepository, UserRepository};
use crate::error::AuthResult;
use crate::presentation::dto::CurrentUserResponse;

/// Shared state for auth handlers and the guard middleware
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, config: AuthConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
        }
    }
}

/// GET /user/authenticate
pub async fn current_user<R>(
    State(state): State<AuthAppState<R>>,
    principal: Principal,
) -> AuthResult<ApiResponse<CurrentUserResponse>>
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    let user = CurrentUserUseCase::new(state.repo.clone())
        .execute(principal)
        .await?;

    Ok(ApiResponse::with_data("Successful", user.into()))
}
