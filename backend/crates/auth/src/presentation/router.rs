//! Auth Router

use axum::{Router, middleware, routing::get};

use crate::application::config::AuthConfig;
use crate::domain::repository::{AccessTokenRepository, UserRepository};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_principal;

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    routes(AuthAppState::new(repo, config))
}

/// Auth routes over an existing state, so the same state can guard other routers
pub fn routes<R>(state: AuthAppState<R>) -> Router
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/user/authenticate", get(handlers::current_user::<R>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_principal::<R>,
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::IssueTokenUseCase;
    use crate::domain::entity::user::User;
    use crate::infra::memory::MemoryAuthRepository;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use kernel::id::UserId;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn app_with_user() -> (Router, String) {
        let repo = MemoryAuthRepository::new();
        repo.insert_user(User::new(UserId::new(42), "Ada", "ada@example.com"))
            .await;

        let state = AuthAppState::new(repo, AuthConfig::with_random_secret());
        let issued = IssueTokenUseCase::new(state.repo.clone(), state.config.clone())
            .execute(UserId::new(42))
            .await
            .unwrap();

        (routes(state), issued.bearer)
    }

    async fn send(app: Router, authorization: Option<&str>) -> (StatusCode, Value) {
        let mut request = Request::builder().uri("/user/authenticate");
        if let Some(value) = authorization {
            request = request.header(header::AUTHORIZATION, value);
        }
        let response = app
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_current_user() {
        let (app, bearer) = app_with_user().await;
        let (status, json) = send(app, Some(&format!("Bearer {bearer}"))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            json!({
                "message": "Successful",
                "data": { "id": 42, "name": "Ada", "email": "ada@example.com" }
            })
        );
    }

    #[tokio::test]
    async fn test_missing_token() {
        let (app, _) = app_with_user().await;
        let (status, json) = send(app, None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json, json!({ "error": "Unauthorized", "message": "Unauthorized" }));
    }

    #[tokio::test]
    async fn test_wrong_scheme() {
        let (app, bearer) = app_with_user().await;
        let (status, _) = send(app, Some(&format!("Token {bearer}"))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_forged_token() {
        let (app, bearer) = app_with_user().await;
        let forged = format!("{}x", bearer);
        let (status, _) = send(app, Some(&format!("Bearer {forged}"))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
