//! Storefront Configuration

use crate::error::ConfigError;

/// Where the storefront API lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Base URL without a trailing slash
    pub app_url: String,
}

impl StorefrontConfig {
    pub fn new(app_url: impl Into<String>) -> Result<Self, ConfigError> {
        let app_url = app_url.into().trim().trim_end_matches('/').to_string();
        if !(app_url.starts_with("http://") || app_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                name: "APP_URL",
                reason: "must start with http:// or https://".to_string(),
            });
        }
        Ok(Self { app_url })
    }

    /// Read `APP_URL`
    pub fn from_env() -> Result<Self, ConfigError> {
        let app_url = std::env::var("APP_URL").map_err(|_| ConfigError::Missing("APP_URL"))?;
        Self::new(app_url)
    }

    /// Absolute URL for an API path such as `/user/authenticate`
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.app_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = StorefrontConfig::new("http://localhost:8000/").unwrap();
        assert_eq!(config.app_url, "http://localhost:8000");
        assert_eq!(
            config.url("/user/authenticate"),
            "http://localhost:8000/user/authenticate"
        );
        assert_eq!(config.url("products/7"), "http://localhost:8000/products/7");
    }

    #[test]
    fn test_scheme_required() {
        let err = StorefrontConfig::new("localhost:8000").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "APP_URL", .. }));
    }
}
