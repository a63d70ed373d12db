//! Data transfer objects for the HTTP API

pub mod auth;

pub use auth::VerifyResponse;
