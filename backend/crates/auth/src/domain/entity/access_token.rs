//! Access Token Entity
//!
//! Server-side record behind a bearer token. The bearer string only carries
//! `token_id` plus its signature; validity is decided by this row.

use chrono::{DateTime, Duration, Utc};
use kernel::id::UserId;
use uuid::Uuid;

/// Access token entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    /// Token ID (UUID v4), embedded in the bearer string
    pub token_id: Uuid,
    /// Token owner
    pub user_id: UserId,
    /// `None` never expires
    pub expires_at: Option<DateTime<Utc>>,
    pub revoked: bool,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// Create a new token for `user_id`
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(user_id: UserId, ttl: Option<Duration>) -> Self {
        let now = Utc::now();
        Self {
            token_id: Uuid::new_v4(),
            user_id,
            expires_at: ttl.map(|ttl| now + ttl),
            revoked: false,
            created_at: now,
            last_used_at: None,
        }
    }

    /// Check if the token has expired at `now`
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| now >= expires_at)
    }

    /// Usable tokens are neither revoked nor expired
    pub fn is_usable(&self, now: DateTime<Utc>) -> bool {
        !self.revoked && !self.is_expired(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token_is_usable() {
        let token = AccessToken::new(UserId::new(1), Some(Duration::hours(1)));
        assert!(token.is_usable(Utc::now()));
    }

    #[test]
    fn test_expired_token() {
        let token = AccessToken::new(UserId::new(1), Some(Duration::hours(1)));
        let later = Utc::now() + Duration::hours(2);
        assert!(token.is_expired(later));
        assert!(!token.is_usable(later));
    }

    #[test]
    fn test_token_without_ttl_never_expires() {
        let token = AccessToken::new(UserId::new(1), None);
        assert!(!token.is_expired(Utc::now() + Duration::days(3650)));
    }

    #[test]
    fn test_revoked_token() {
        let mut token = AccessToken::new(UserId::new(1), None);
        token.revoked = true;
        assert!(!token.is_usable(Utc::now()));
    }
}
