//! Current User Use Case
//!
//! Loads the profile of the authenticated principal.

use std::sync::Arc;

use kernel::principal::Principal;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Current user use case
pub struct CurrentUserUseCase<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    user_repo: Arc<R>,
}

impl<R> CurrentUserUseCase<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }

    /// A valid token whose user was deleted is treated as unauthenticated
    pub async fn execute(&self, principal: Principal) -> AuthResult<User> {
        self.user_repo
            .find_user(principal.user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::MemoryAuthRepository;
    use kernel::id::UserId;

    #[tokio::test]
    async fn test_returns_user() {
        let repo = Arc::new(MemoryAuthRepository::new());
        repo.insert_user(User::new(UserId::new(42), "Ada", "ada@example.com"))
            .await;

        let user = CurrentUserUseCase::new(repo)
            .execute(Principal::new(UserId::new(42)))
            .await
            .unwrap();
        assert_eq!(user.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_missing_user_is_unauthorized() {
        let repo = Arc::new(MemoryAuthRepository::new());
        let err = CurrentUserUseCase::new(repo)
            .execute(Principal::new(UserId::new(7)))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 401);
    }
}
