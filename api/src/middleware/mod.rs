//! HTTP middleware: authentication guards and CORS

pub mod auth;
pub mod cors;

pub use auth::{AuthenticatedCustomer, MaybeCustomer, OptionalAuth, RequireAuth};
pub use cors::create_cors;
