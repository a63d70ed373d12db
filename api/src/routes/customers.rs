//! Customer routes (protected)

use actix_web::HttpResponse;

use crate::middleware::AuthenticatedCustomer;
use se_shared::types::ApiResponse;

/// Handler for GET /api/v1/customers/me
///
/// Returns the authenticated customer's identity projection. The route sits
/// behind the strict auth guard, so the extractor always finds the customer.
pub async fn me(auth: AuthenticatedCustomer) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(auth.0))
}
