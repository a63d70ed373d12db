//! Authentication and token configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default access token lifetime (3 hours)
const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 3 * 60 * 60;

/// Default refresh token lifetime (7 days)
const DEFAULT_REFRESH_TOKEN_EXPIRY: i64 = 7 * 24 * 60 * 60;

/// Configuration loading errors
///
/// A missing signing secret is a startup-time fatal condition; the process
/// must refuse to boot rather than sign tokens with a guessable default.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JWT_SECRET is not set; refusing to start without a signing secret")]
    MissingJwtSecret,

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },
}

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT secret key for signing tokens
    pub jwt_secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,
}

impl AuthConfig {
    /// Create a new configuration with a secret and default expirations
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            access_token_expiry: DEFAULT_ACCESS_TOKEN_EXPIRY,
            refresh_token_expiry: DEFAULT_REFRESH_TOKEN_EXPIRY,
        }
    }

    /// Set access token expiry in hours
    pub fn with_access_expiry_hours(mut self, hours: i64) -> Self {
        self.access_token_expiry = hours * 3600;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry = days * 86400;
        self
    }

    /// Load from environment variables
    ///
    /// Reads `JWT_SECRET` (required), `JWT_ACCESS_TOKEN_EXPIRY` and
    /// `JWT_REFRESH_TOKEN_EXPIRY` (seconds, optional).
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingJwtSecret)?;

        let access_token_expiry = parse_env_i64("JWT_ACCESS_TOKEN_EXPIRY", DEFAULT_ACCESS_TOKEN_EXPIRY)?;
        let refresh_token_expiry = parse_env_i64("JWT_REFRESH_TOKEN_EXPIRY", DEFAULT_REFRESH_TOKEN_EXPIRY)?;

        Ok(Self {
            jwt_secret,
            access_token_expiry,
            refresh_token_expiry,
        })
    }
}

fn parse_env_i64(var: &str, default: i64) -> Result<i64, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
            var: var.to_string(),
            message: format!("expected an integer, got '{}'", value),
        }),
        Err(_) => Ok(default),
    }
}
