//! Application Configuration
//!
//! Configuration for the Account application layer.

use kernel::pagination::DEFAULT_PER_PAGE;

/// Account application configuration
#[derive(Debug, Clone)]
pub struct AccountConfig {
    /// Page size for address and payment config listings
    pub per_page: u32,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
        }
    }
}
