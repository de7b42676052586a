//! Server Configuration
//!
//! Loaded once at startup from the environment (after `.env`).

use base64::Engine;
use base64::engine::general_purpose;
use std::net::SocketAddr;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set in environment")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub database_max_connections: u32,
    /// `None` only in debug builds; a random secret is generated then
    pub token_secret: Option<[u8; 32]>,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok(), !cfg!(debug_assertions))
    }

    /// Build from any variable source; `require_secret` is set for release builds
    pub fn from_lookup<F>(lookup: F, require_secret: bool) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let database_url = var("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let bind_addr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                name: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        let frontend_origins = var("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let database_max_connections = match var("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError::Invalid {
                    name: "DATABASE_MAX_CONNECTIONS",
                    reason: format!("expected a positive integer, got {value:?}"),
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let token_secret = match var("AUTH_TOKEN_SECRET") {
            Some(value) => Some(decode_secret(&value)?),
            None if require_secret => return Err(ConfigError::Missing("AUTH_TOKEN_SECRET")),
            None => None,
        };

        Ok(Self {
            database_url,
            bind_addr,
            frontend_origins,
            database_max_connections,
            token_secret,
        })
    }
}

/// Base64 (standard alphabet) encoded 32-byte key
fn decode_secret(value: &str) -> Result<[u8; 32], ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        name: "AUTH_TOKEN_SECRET",
        reason,
    };

    let bytes = general_purpose::STANDARD
        .decode(value.trim())
        .map_err(|e| invalid(e.to_string()))?;

    <[u8; 32]>::try_from(bytes.as_slice())
        .map_err(|_| invalid(format!("expected 32 bytes, got {}", bytes.len())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)], require_secret: bool) -> Result<ApiConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|name| vars.get(name).cloned(), require_secret)
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/shop")], false).unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:31113".parse::<SocketAddr>().unwrap());
        assert_eq!(
            config.frontend_origins,
            vec!["http://localhost:40922", "http://127.0.0.1:40922"]
        );
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.token_secret, None);
    }

    #[test]
    fn test_database_url_required() {
        let err = load(&[], false).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn test_secret_required_in_release() {
        let err = load(&[("DATABASE_URL", "postgres://db")], true).unwrap_err();
        assert_eq!(err, ConfigError::Missing("AUTH_TOKEN_SECRET"));
    }

    #[test]
    fn test_secret_decoding() {
        let secret = general_purpose::STANDARD.encode([7u8; 32]);
        let config = load(
            &[("DATABASE_URL", "postgres://db"), ("AUTH_TOKEN_SECRET", &secret)],
            true,
        )
        .unwrap();
        assert_eq!(config.token_secret, Some([7u8; 32]));

        let short = general_purpose::STANDARD.encode([7u8; 16]);
        let err = load(
            &[("DATABASE_URL", "postgres://db"), ("AUTH_TOKEN_SECRET", &short)],
            true,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "AUTH_TOKEN_SECRET", .. }));
    }

    #[test]
    fn test_overrides() {
        let config = load(
            &[
                ("DATABASE_URL", "postgres://db"),
                ("BIND_ADDR", "127.0.0.1:8080"),
                ("FRONTEND_ORIGINS", "https://shop.example, "),
                ("DATABASE_MAX_CONNECTIONS", "20"),
            ],
            false,
        )
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.frontend_origins, vec!["https://shop.example"]);
        assert_eq!(config.database_max_connections, 20);

        let err = load(
            &[("DATABASE_URL", "postgres://db"), ("DATABASE_MAX_CONNECTIONS", "0")],
            false,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "DATABASE_MAX_CONNECTIONS", .. }));
    }
}
