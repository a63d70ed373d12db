//! Application state and factory
//!
//! This module handles the initialization of the application state
//! and provides the factory for creating the Actix-web application.

use actix_web::{web, App, HttpResponse};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use crate::middleware::{cors::create_cors, RequireAuth};
use crate::routes::{auth::verify_session, customers};
use se_core::services::session::VerificationService;
use se_shared::types::ErrorBody;

/// Shared application state
pub struct AppState {
    /// Verification state machine (token checks + identity resolution)
    pub verification: Arc<VerificationService>,
}

impl AppState {
    /// Creates the application state
    pub fn new(verification: Arc<VerificationService>) -> Self {
        Self { verification }
    }
}

/// Create and configure the application with all routes and middleware
pub fn create_app(
    app_state: web::Data<AppState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let verification = Arc::clone(&app_state.verification);
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        // Order matters: CORS runs before request logging
        .wrap(TracingLogger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth").route("/verify", web::post().to(verify_session)),
                )
                .service(
                    web::scope("/customers")
                        .wrap(RequireAuth::new(verification))
                        .route("/me", web::get().to(customers::me)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "shopease-auth-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::new(
        "NOT_FOUND",
        "The requested resource was not found",
    ))
}
