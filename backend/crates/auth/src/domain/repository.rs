//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use uuid::Uuid;

use crate::domain::entity::{access_token::AccessToken, user::User};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find user by ID
    async fn find_user(&self, id: UserId) -> AuthResult<Option<User>>;
}

/// Access token repository trait
#[trait_variant::make(AccessTokenRepository: Send)]
pub trait LocalAccessTokenRepository {
    /// Persist a new token
    async fn create_token(&self, token: &AccessToken) -> AuthResult<()>;

    /// Find token by ID
    async fn find_token(&self, token_id: Uuid) -> AuthResult<Option<AccessToken>>;

    /// Record token use
    async fn touch_token(&self, token_id: Uuid, at: DateTime<Utc>) -> AuthResult<()>;

    /// Revoke a token; `false` when it does not exist
    async fn revoke_token(&self, token_id: Uuid) -> AuthResult<bool>;
}
