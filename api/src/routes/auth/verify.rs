//! Handler for POST /api/v1/auth/verify
//!
//! The session verification endpoint: clients present their access token in
//! the `Authorization` header and their refresh token in `x-refresh-token`.
//! The response tells the client to proceed, to swap in a silently rotated
//! access token, or to re-authenticate. Terminal failures deliberately look
//! identical on the wire; the precise reason is only logged.

use actix_web::{web, HttpRequest, HttpResponse};

use crate::app::AppState;
use crate::dto::VerifyResponse;
use crate::handlers::ApiError;
use se_core::domain::value_objects::VerifyOutcome;

/// Refresh token header carried alongside the Authorization header
pub const REFRESH_TOKEN_HEADER: &str = "x-refresh-token";

/// Verify the session, rotating the access token when possible
///
/// # Responses
/// - 200 with `ALLOW_ACCESS` — access token valid, identity attached
/// - 200 with `UPDATE_ACCESS_TOKEN` — access token rotated; body carries
///   the replacement, the refresh token is unchanged
/// - 401 with `REDIRECT_TO_LOGIN` — session not recoverable
pub async fn verify_session(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let authorization = header_value(&req, actix_web::http::header::AUTHORIZATION.as_str());
    let refresh_token = header_value(&req, REFRESH_TOKEN_HEADER);

    let outcome = state
        .verification
        .verify_session(authorization.as_deref(), refresh_token.as_deref())
        .await?;

    let status_is_ok = !matches!(outcome, VerifyOutcome::RedirectToLogin);
    let body = VerifyResponse::from_outcome(outcome);

    if status_is_ok {
        Ok(HttpResponse::Ok().json(body))
    } else {
        Ok(HttpResponse::Unauthorized().json(body))
    }
}

fn header_value(req: &HttpRequest, name: &str) -> Option<String> {
    req.headers()
        .get(name)?
        .to_str()
        .ok()
        .map(|s| s.to_string())
}
