//! Issue Token Use Case
//!
//! Mints a bearer token for a user. Token issuance is owned by the sign-in
//! flow elsewhere; this exists for tests and operator tooling.

use std::sync::Arc;

use kernel::id::UserId;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::application::token::TokenSigner;
use crate::domain::entity::access_token::AccessToken;
use crate::domain::repository::AccessTokenRepository;
use crate::error::AuthResult;

/// Issued token
pub struct IssueTokenOutput {
    pub token_id: Uuid,
    /// Value for `Authorization: Bearer <bearer>`
    pub bearer: String,
}

/// Issue token use case
pub struct IssueTokenUseCase<R>
where
    R: AccessTokenRepository + Clone + Send + Sync + 'static,
{
    token_repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> IssueTokenUseCase<R>
where
    R: AccessTokenRepository + Clone + Send + Sync + 'static,
{
    pub fn new(token_repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { token_repo, config }
    }

    pub async fn execute(&self, user_id: UserId) -> AuthResult<IssueTokenOutput> {
        let token = AccessToken::new(user_id, self.config.token_ttl_chrono());
        self.token_repo.create_token(&token).await?;

        tracing::info!(user_id = %user_id, token_id = %token.token_id, "Access token issued");

        Ok(IssueTokenOutput {
            token_id: token.token_id,
            bearer: TokenSigner::new(&self.config.token_secret).sign(token.token_id)?,
        })
    }
}
