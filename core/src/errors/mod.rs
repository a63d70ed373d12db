//! Domain-specific error types for session authentication.
//!
//! The expired/invalid split matters: only an *expired* access token may be
//! recovered through the refresh branch of the verification state machine.
//! Every other variant is terminal for the request that raised it.

use thiserror::Error;

/// Session-authentication errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Signing secret is not configured")]
    MissingSecret,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    TokenInvalid,

    #[error("Token generation failed")]
    TokenCreation,

    #[error("Missing credentials")]
    MissingToken,

    #[error("Malformed authorization header")]
    MalformedHeader,

    #[error("Customer not found")]
    IdentityNotFound,

    #[error("Session cache unavailable: {message}")]
    CacheUnavailable { message: String },

    #[error("Customer lookup failed: {message}")]
    Repository { message: String },
}

impl AuthError {
    /// Stable error code for API responses and logs
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingSecret => "MISSING_SECRET",
            AuthError::TokenExpired => "TOKEN_EXPIRED",
            AuthError::TokenInvalid => "TOKEN_INVALID",
            AuthError::TokenCreation => "TOKEN_CREATION_FAILED",
            AuthError::MissingToken => "MISSING_CREDENTIALS",
            AuthError::MalformedHeader => "MALFORMED_HEADER",
            AuthError::IdentityNotFound => "IDENTITY_NOT_FOUND",
            AuthError::CacheUnavailable { .. } => "CACHE_UNAVAILABLE",
            AuthError::Repository { .. } => "REPOSITORY_ERROR",
        }
    }

    /// Whether the refresh branch may recover from this failure.
    ///
    /// Only an expired access token qualifies; an invalid token signals
    /// tampering or a wrong secret, which a refresh cannot remedy.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AuthError::TokenExpired)
    }
}

/// Result alias for session-authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(AuthError::TokenExpired.code(), "TOKEN_EXPIRED");
        assert_eq!(AuthError::TokenInvalid.code(), "TOKEN_INVALID");
        assert_eq!(AuthError::IdentityNotFound.code(), "IDENTITY_NOT_FOUND");
    }

    #[test]
    fn test_only_expiry_is_recoverable() {
        assert!(AuthError::TokenExpired.is_recoverable());
        assert!(!AuthError::TokenInvalid.is_recoverable());
        assert!(!AuthError::IdentityNotFound.is_recoverable());
        assert!(!AuthError::MissingToken.is_recoverable());
    }
}
