//! Authentication middleware for protected API endpoints
//!
//! `RequireAuth` runs the short-circuit verification path (header shape,
//! access-token check, identity resolution) and injects the resolved
//! customer into request extensions; any failure rejects with 401. Expired
//! access tokens are NOT recovered here: ordinary routes never carry the
//! refresh token, so clients are expected to hit the dedicated verify
//! endpoint and retry.
//!
//! `OptionalAuth` runs the same flow but never rejects; handlers see
//! `MaybeCustomer(None)` when the request was anonymous or unverifiable.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use se_core::domain::entities::Customer;
use se_core::errors::AuthError;
use se_core::services::session::VerificationService;

use crate::handlers::ApiError;

/// Resolved customer identity injected into requests by [`RequireAuth`]
#[derive(Debug, Clone)]
pub struct AuthenticatedCustomer(pub Customer);

/// Strict authentication middleware factory
pub struct RequireAuth {
    verification: Arc<VerificationService>,
}

impl RequireAuth {
    /// Creates a strict authentication guard
    pub fn new(verification: Arc<VerificationService>) -> Self {
        Self { verification }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAuthMiddleware {
            service: Rc::new(service),
            verification: Arc::clone(&self.verification),
        }))
    }
}

/// Strict authentication middleware service
pub struct RequireAuthMiddleware<S> {
    service: Rc<S>,
    verification: Arc<VerificationService>,
}

impl<S, B> Service<ServiceRequest> for RequireAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let verification = Arc::clone(&self.verification);

        Box::pin(async move {
            let header = authorization_header(&req);

            match verification.authenticate(header.as_deref()).await {
                Ok(customer) => {
                    req.extensions_mut().insert(AuthenticatedCustomer(customer));
                    service.call(req).await
                }
                Err(e) => Err(ApiError(e).into()),
            }
        })
    }
}

/// Lenient authentication middleware factory
///
/// Identical verification flow, but failures pass through anonymously
/// instead of rejecting.
pub struct OptionalAuth {
    verification: Arc<VerificationService>,
}

impl OptionalAuth {
    /// Creates a lenient authentication guard
    pub fn new(verification: Arc<VerificationService>) -> Self {
        Self { verification }
    }
}

impl<S, B> Transform<S, ServiceRequest> for OptionalAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = OptionalAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(OptionalAuthMiddleware {
            service: Rc::new(service),
            verification: Arc::clone(&self.verification),
        }))
    }
}

/// Lenient authentication middleware service
pub struct OptionalAuthMiddleware<S> {
    service: Rc<S>,
    verification: Arc<VerificationService>,
}

impl<S, B> Service<ServiceRequest> for OptionalAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let verification = Arc::clone(&self.verification);

        Box::pin(async move {
            let header = authorization_header(&req);

            if let Ok(customer) = verification.authenticate(header.as_deref()).await {
                req.extensions_mut().insert(AuthenticatedCustomer(customer));
            }

            service.call(req).await
        })
    }
}

/// Reads the raw Authorization header, if present and valid UTF-8
fn authorization_header(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()
        .map(|s| s.to_string())
}

/// Extractor for handlers behind [`RequireAuth`]
impl FromRequest for AuthenticatedCustomer {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthenticatedCustomer>()
            .cloned()
            .ok_or_else(|| ApiError(AuthError::MissingToken).into());

        ready(result)
    }
}

/// Extractor for handlers behind [`OptionalAuth`]
pub struct MaybeCustomer(pub Option<Customer>);

impl FromRequest for MaybeCustomer {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let customer = req
            .extensions()
            .get::<AuthenticatedCustomer>()
            .map(|auth| auth.0.clone());
        ready(Ok(MaybeCustomer(customer)))
    }
}
