//! Token claims for JWT-based session authentication.
//!
//! The same claims shape backs both token slots; access and refresh tokens
//! differ only in their expiration. Tokens carry their own expiry and there
//! is no server-side revocation list, so invalidation is TTL-only.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (customer ID)
    pub sub: String,

    /// Customer email
    pub email: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates new claims expiring `ttl_seconds` from now
    pub fn new(customer_id: impl Into<String>, email: impl Into<String>, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ttl_seconds);

        Self {
            sub: customer_id.into(),
            email: email.into(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Token pair returned to the client after issuance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token (short-lived)
    pub access_token: String,

    /// JWT refresh token (long-lived)
    pub refresh_token: String,

    /// Access token expiry time in seconds
    pub access_expires_in: i64,

    /// Refresh token expiry time in seconds
    pub refresh_expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(
        access_token: String,
        refresh_token: String,
        access_expires_in: i64,
        refresh_expires_in: i64,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in,
            refresh_expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_creation() {
        let claims = Claims::new("cust-1", "jo@example.com", 3600);

        assert_eq!(claims.sub, "cust-1");
        assert_eq!(claims.email, "jo@example.com");
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.exp - claims.iat, 3600);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_expiration() {
        let mut claims = Claims::new("cust-1", "jo@example.com", 3600);
        claims.exp = Utc::now().timestamp() - 1;

        assert!(claims.is_expired());
    }

    #[test]
    fn test_claims_serialization() {
        let claims = Claims::new("cust-1", "jo@example.com", 60);

        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: Claims = serde_json::from_str(&json).unwrap();

        assert_eq!(claims, deserialized);
    }

    #[test]
    fn test_claims_require_subject() {
        // A payload without a subject must not deserialize into Claims
        let json = r#"{"email":"jo@example.com","iat":0,"exp":9999999999}"#;
        assert!(serde_json::from_str::<Claims>(json).is_err());
    }

    #[test]
    fn test_token_pair_creation() {
        let pair = TokenPair::new(
            "access".to_string(),
            "refresh".to_string(),
            10800,
            604800,
        );

        assert_eq!(pair.access_token, "access");
        assert_eq!(pair.refresh_token, "refresh");
        assert_eq!(pair.access_expires_in, 10800);
        assert_eq!(pair.refresh_expires_in, 604800);
    }
}
