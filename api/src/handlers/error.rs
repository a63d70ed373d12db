//! Mapping from domain errors to HTTP responses
//!
//! All authentication failures surface as 401 with the standard error
//! envelope; the internal variant picks the log line, not the status. Only
//! genuine server faults (signing failure, store outage) become 500s.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use se_core::errors::AuthError;
use se_shared::types::ErrorBody;

/// Wrapper that lets an [`AuthError`] travel through actix as a response
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub AuthError);

impl ApiError {
    /// The wrapped domain error
    pub fn inner(&self) -> &AuthError {
        &self.0
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            AuthError::TokenExpired
            | AuthError::TokenInvalid
            | AuthError::MissingToken
            | AuthError::MalformedHeader
            | AuthError::IdentityNotFound => StatusCode::UNAUTHORIZED,
            AuthError::MissingSecret
            | AuthError::TokenCreation
            | AuthError::CacheUnavailable { .. }
            | AuthError::Repository { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        // Internal details never leak into a response body
        let message = if status == StatusCode::UNAUTHORIZED {
            "Authentication required".to_string()
        } else {
            "Internal server error".to_string()
        };

        let code = if status == StatusCode::UNAUTHORIZED {
            "UNAUTHORIZED"
        } else {
            "INTERNAL_ERROR"
        };

        tracing::debug!(error = %self.0, code = self.0.code(), "request rejected");

        HttpResponse::build(status).json(ErrorBody::new(code, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_failures_map_to_401() {
        for error in [
            AuthError::TokenExpired,
            AuthError::TokenInvalid,
            AuthError::MissingToken,
            AuthError::MalformedHeader,
            AuthError::IdentityNotFound,
        ] {
            assert_eq!(ApiError(error).status_code(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_internal_faults_map_to_500() {
        assert_eq!(
            ApiError(AuthError::TokenCreation).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError(AuthError::Repository {
                message: "store offline".into()
            })
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
