//! In-Memory Repository
//!
//! Backs the generic router in tests. State is shared across clones.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entity::{access_token::AccessToken, user::User};
use crate::domain::repository::{AccessTokenRepository, UserRepository};
use crate::error::AuthResult;

#[derive(Default)]
struct State {
    users: HashMap<UserId, User>,
    tokens: HashMap<Uuid, AccessToken>,
}

/// In-memory auth repository
#[derive(Clone, Default)]
pub struct MemoryAuthRepository {
    state: Arc<RwLock<State>>,
}

impl MemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user
    pub async fn insert_user(&self, user: User) {
        self.state.write().await.users.insert(user.id, user);
    }

    /// Snapshot of a stored token
    pub async fn token(&self, token_id: Uuid) -> Option<AccessToken> {
        self.state.read().await.tokens.get(&token_id).cloned()
    }
}

impl UserRepository for MemoryAuthRepository {
    async fn find_user(&self, id: UserId) -> AuthResult<Option<User>> {
        Ok(self.state.read().await.users.get(&id).cloned())
    }
}

impl AccessTokenRepository for MemoryAuthRepository {
    async fn create_token(&self, token: &AccessToken) -> AuthResult<()> {
        self.state
            .write()
            .await
            .tokens
            .insert(token.token_id, token.clone());
        Ok(())
    }

    async fn find_token(&self, token_id: Uuid) -> AuthResult<Option<AccessToken>> {
        Ok(self.token(token_id).await)
    }

    async fn touch_token(&self, token_id: Uuid, at: DateTime<Utc>) -> AuthResult<()> {
        if let Some(token) = self.state.write().await.tokens.get_mut(&token_id) {
            token.last_used_at = Some(at);
        }
        Ok(())
    }

    async fn revoke_token(&self, token_id: Uuid) -> AuthResult<bool> {
        Ok(match self.state.write().await.tokens.get_mut(&token_id) {
            Some(token) => {
                token.revoked = true;
                true
            }
            None => false,
        })
    }
}
