//! Verification state machine
//!
//! Stateless per call. Given an access token (and, when rotation is
//! requested, a refresh token) the machine decides one of three outcomes:
//! allow the request, silently rotate the access token, or force
//! re-authentication.

use tracing::debug;

use crate::domain::entities::Customer;
use crate::domain::value_objects::VerifyOutcome;
use crate::errors::AuthError;

use super::resolver::IdentityResolver;
use crate::services::token::TokenService;

/// Drives token verification and identity resolution for inbound requests
pub struct VerificationService {
    tokens: TokenService,
    resolver: IdentityResolver,
}

impl VerificationService {
    /// Creates a new verification service
    pub fn new(tokens: TokenService, resolver: IdentityResolver) -> Self {
        Self { tokens, resolver }
    }

    /// The underlying token service
    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    /// The underlying identity resolver
    pub fn resolver(&self) -> &IdentityResolver {
        &self.resolver
    }

    /// Authenticates an ordinary protected-route request (no rotation)
    ///
    /// Runs the short-circuit path of the state machine: header shape,
    /// access-token verification, identity resolution. Every failure is
    /// terminal here; an expired access token is not recovered because
    /// ordinary routes never carry the refresh token.
    ///
    /// # Arguments
    ///
    /// * `authorization` - Raw `Authorization` header value, if present
    pub async fn authenticate(&self, authorization: Option<&str>) -> Result<Customer, AuthError> {
        let header = authorization.ok_or(AuthError::MissingToken)?;
        let token = bearer_token(header)?;
        let claims = self.tokens.verify_access(token)?;
        self.resolver.resolve(&claims.sub).await
    }

    /// Runs the full state machine with silent rotation
    ///
    /// Used by the dedicated verification endpoint. All terminal failures
    /// collapse to `Ok(VerifyOutcome::RedirectToLogin)` — the internal
    /// distinction (expired vs. invalid vs. not-found) picks the path and is
    /// logged, but is not leaked to the caller. An `Err` is only returned
    /// for internal faults (token signing failure).
    ///
    /// # Arguments
    ///
    /// * `authorization` - Raw `Authorization` header value, if present
    /// * `refresh_token` - Refresh token, if present
    pub async fn verify_session(
        &self,
        authorization: Option<&str>,
        refresh_token: Option<&str>,
    ) -> Result<VerifyOutcome, AuthError> {
        // State 1: missing credentials
        let Some(header) = authorization else {
            return Ok(Self::redirect("missing access token"));
        };
        let Some(refresh) = refresh_token.filter(|t| !t.is_empty()) else {
            return Ok(Self::redirect("missing refresh token"));
        };

        // State 2: malformed bearer header
        let access = match bearer_token(header) {
            Ok(token) => token,
            Err(_) => return Ok(Self::redirect("malformed authorization header")),
        };

        // State 3: access token verification
        match self.tokens.verify_access(access) {
            Ok(claims) => {
                // State 4: identity resolution for the access token
                match self.resolver.resolve(&claims.sub).await {
                    Ok(customer) => Ok(VerifyOutcome::Allow { customer }),
                    Err(e) => Ok(Self::redirect_err("access identity resolution", &e)),
                }
            }
            Err(AuthError::TokenExpired) => self.rotate(refresh).await,
            Err(e) => {
                // An invalid access token signals tampering or a wrong
                // secret; a refresh cannot remedy that
                Ok(Self::redirect_err("access token verification", &e))
            }
        }
    }

    /// States 5–6: refresh-token verification and silent rotation
    ///
    /// A refresh token is never itself refreshed: any verification failure
    /// here, expired included, is terminal.
    async fn rotate(&self, refresh: &str) -> Result<VerifyOutcome, AuthError> {
        let claims = match self.tokens.verify_refresh(refresh) {
            Ok(claims) => claims,
            Err(e) => return Ok(Self::redirect_err("refresh token verification", &e)),
        };

        match self.resolver.resolve(&claims.sub).await {
            Ok(customer) => {
                let access_token = self.tokens.issue_access(&claims.sub, &claims.email)?;
                debug!(customer_id = %claims.sub, "access token silently rotated");
                Ok(VerifyOutcome::RotateAccess {
                    access_token,
                    customer,
                })
            }
            Err(e) => Ok(Self::redirect_err("refresh identity resolution", &e)),
        }
    }

    fn redirect(reason: &str) -> VerifyOutcome {
        debug!(reason, "verification failed; redirecting to login");
        VerifyOutcome::RedirectToLogin
    }

    fn redirect_err(stage: &str, error: &AuthError) -> VerifyOutcome {
        debug!(stage, error = %error, "verification failed; redirecting to login");
        VerifyOutcome::RedirectToLogin
    }
}

/// Extracts the token from a `Bearer <token>` header value
pub fn bearer_token(header: &str) -> Result<&str, AuthError> {
    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MalformedHeader)?;
    if token.is_empty() {
        return Err(AuthError::MalformedHeader);
    }
    Ok(token)
}
