//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

use crate::domain::entities::{Claims, TokenPair};
use crate::errors::AuthError;

use super::config::TokenConfig;

/// Service for issuing and verifying session tokens
///
/// Access and refresh tokens are both HS256 JWTs signed with the shared
/// secret and carrying the same claims shape; they differ only in their
/// expiration.
pub struct TokenService {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token configuration (secret and expirations)
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or `AuthError::MissingSecret` when no signing
    /// secret is configured. Callers treat that as a startup-time fatal
    /// condition, not a per-request error.
    pub fn new(config: TokenConfig) -> Result<Self, AuthError> {
        if config.secret.is_empty() {
            return Err(AuthError::MissingSecret);
        }

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // No leeway: a token one second past its expiry is expired
        validation.leeway = 0;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Issues an access/refresh token pair for a customer
    ///
    /// Both tokens are signed from the same identity claims with distinct
    /// expirations (defaults 3 hours / 7 days).
    pub fn issue_pair(&self, customer_id: &str, email: &str) -> Result<TokenPair, AuthError> {
        let access_token = self.issue_access(customer_id, email)?;

        let refresh_claims = Claims::new(customer_id, email, self.config.refresh_token_expiry);
        let refresh_token = self.encode_jwt(&refresh_claims)?;

        debug!(customer_id, "issued session token pair");

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.config.access_token_expiry,
            self.config.refresh_token_expiry,
        ))
    }

    /// Issues a single access token (used by silent rotation)
    pub fn issue_access(&self, customer_id: &str, email: &str) -> Result<String, AuthError> {
        let claims = Claims::new(customer_id, email, self.config.access_token_expiry);
        self.encode_jwt(&claims)
    }

    /// Verifies an access token and returns its claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Signature and expiry are valid
    /// * `Err(AuthError::TokenExpired)` - Signature valid, expiry passed
    /// * `Err(AuthError::TokenInvalid)` - Signature invalid, token malformed,
    ///   or the subject claim is missing
    pub fn verify_access(&self, token: &str) -> Result<Claims, AuthError> {
        self.decode_jwt(token)
    }

    /// Verifies a refresh token and returns its claims
    ///
    /// Performs the same cryptographic and expiry checks as `verify_access`;
    /// the two are distinct only by which token slot they are applied to.
    pub fn verify_refresh(&self, token: &str) -> Result<Claims, AuthError> {
        self.decode_jwt(token)
    }

    /// Encodes claims into a JWT
    fn encode_jwt(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| AuthError::TokenCreation)
    }

    /// Decodes and validates a JWT
    ///
    /// The expiry check runs against a valid signature, so an expired token
    /// always maps to `TokenExpired` regardless of how long past expiry it
    /// is; every other failure collapses to `TokenInvalid`.
    fn decode_jwt(&self, token: &str) -> Result<Claims, AuthError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                    _ => AuthError::TokenInvalid,
                }
            })?;

        if token_data.claims.sub.is_empty() {
            return Err(AuthError::TokenInvalid);
        }

        Ok(token_data.claims)
    }
}
