//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret key for HMAC token signatures (32 bytes)
    pub token_secret: [u8; 32],
    /// Lifetime of newly issued tokens; `None` never expires
    pub token_ttl: Option<Duration>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
            token_ttl: Some(Duration::from_secs(7 * 24 * 3600)), // 1 week
        }
    }
}

impl AuthConfig {
    /// Create config with the given signing secret
    pub fn with_secret(token_secret: [u8; 32]) -> Self {
        Self {
            token_secret,
            ..Default::default()
        }
    }

    /// Create config with a random signing secret (for development)
    pub fn with_random_secret() -> Self {
        Self::with_secret(platform::crypto::random_key())
    }

    /// Token TTL as a chrono duration
    pub fn token_ttl_chrono(&self) -> Option<chrono::Duration> {
        self.token_ttl
            .and_then(|ttl| chrono::Duration::from_std(ttl).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_secret_is_not_zero() {
        let config = AuthConfig::with_random_secret();
        assert_ne!(config.token_secret, [0u8; 32]);
    }

    #[test]
    fn test_ttl_conversion() {
        let config = AuthConfig::default();
        assert_eq!(config.token_ttl_chrono(), Some(chrono::Duration::days(7)));

        let config = AuthConfig {
            token_ttl: None,
            ..Default::default()
        };
        assert_eq!(config.token_ttl_chrono(), None);
    }
}
