//! Resolve Principal Use Case
//!
//! Turns a bearer token into the authenticated [`Principal`].

use std::sync::Arc;

use chrono::Utc;
use kernel::principal::Principal;

use crate::application::config::AuthConfig;
use crate::application::token::TokenSigner;
use crate::domain::repository::AccessTokenRepository;
use crate::error::{AuthError, AuthResult};

/// Resolve principal use case
pub struct ResolvePrincipalUseCase<R>
where
    R: AccessTokenRepository + Clone + Send + Sync + 'static,
{
    token_repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> ResolvePrincipalUseCase<R>
where
    R: AccessTokenRepository + Clone + Send + Sync + 'static,
{
    pub fn new(token_repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { token_repo, config }
    }

    /// Verify the token and return its owner
    pub async fn execute(&self, token: &str) -> AuthResult<Principal> {
        let token_id = TokenSigner::new(&self.config.token_secret).verify(token)?;

        let record = self
            .token_repo
            .find_token(token_id)
            .await?
            .ok_or(AuthError::TokenInvalid)?;

        let now = Utc::now();
        if !record.is_usable(now) {
            return Err(AuthError::TokenInvalid);
        }

        // Update last use in background
        let repo = self.token_repo.clone();
        tokio::spawn(async move {
            if let Err(e) = repo.touch_token(token_id, now).await {
                tracing::warn!(error = %e, "Failed to update token last use");
            }
        });

        Ok(Principal::new(record.user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::issue_token::IssueTokenUseCase;
    use crate::domain::entity::access_token::AccessToken;
    use crate::infra::memory::MemoryAuthRepository;
    use kernel::id::UserId;

    fn setup() -> (Arc<MemoryAuthRepository>, Arc<AuthConfig>) {
        (
            Arc::new(MemoryAuthRepository::new()),
            Arc::new(AuthConfig::with_random_secret()),
        )
    }

    #[tokio::test]
    async fn test_resolves_issued_token() {
        let (repo, config) = setup();
        let issued = IssueTokenUseCase::new(repo.clone(), config.clone())
            .execute(UserId::new(42))
            .await
            .unwrap();

        let principal = ResolvePrincipalUseCase::new(repo, config)
            .execute(&issued.bearer)
            .await
            .unwrap();
        assert_eq!(principal.user_id, UserId::new(42));
    }

    #[tokio::test]
    async fn test_rejects_unknown_token() {
        let (repo, config) = setup();
        let unknown = TokenSigner::new(&config.token_secret).sign(uuid::Uuid::new_v4()).unwrap();

        let result = ResolvePrincipalUseCase::new(repo, config).execute(&unknown).await;
        assert!(matches!(result, Err(AuthError::TokenInvalid)));
    }

    #[tokio::test]
    async fn test_rejects_revoked_token() {
        let (repo, config) = setup();
        let issued = IssueTokenUseCase::new(repo.clone(), config.clone())
            .execute(UserId::new(1))
            .await
            .unwrap();
        assert!(repo.revoke_token(issued.token_id).await.unwrap());

        let result = ResolvePrincipalUseCase::new(repo, config).execute(&issued.bearer).await;
        assert!(matches!(result, Err(AuthError::TokenInvalid)));
    }

    #[tokio::test]
    async fn test_rejects_expired_token() {
        let (repo, config) = setup();
        let mut token = AccessToken::new(UserId::new(1), None);
        token.expires_at = Some(Utc::now() - chrono::Duration::minutes(1));
        repo.create_token(&token).await.unwrap();

        let bearer = TokenSigner::new(&config.token_secret).sign(token.token_id).unwrap();
        let result = ResolvePrincipalUseCase::new(repo, config).execute(&bearer).await;
        assert!(matches!(result, Err(AuthError::TokenInvalid)));
    }
}
