//! Application configuration assembled from the environment

use se_shared::config::{AuthConfig, CacheConfig, ConfigError, ServerConfig};

/// Top-level configuration for the API server
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerConfig,
    /// JWT signing settings
    pub auth: AuthConfig,
    /// Redis session cache settings
    pub cache: CacheConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    ///
    /// Fails fast when a required variable is missing or unparseable;
    /// in particular a missing `JWT_SECRET` aborts startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env(),
            auth: AuthConfig::from_env()?,
            cache: CacheConfig::from_env(),
        })
    }
}
