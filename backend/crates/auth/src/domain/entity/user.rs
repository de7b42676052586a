//! User Entity
//!
//! Account owner as seen by the guard. Only `id` is consumed by the
//! resource crates; name and email are served by `/user/authenticate`.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a user with fresh timestamps
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            email: email.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
