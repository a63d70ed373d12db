//! # API Layer
//!
//! HTTP surface for the session-authentication stack: auth middleware for
//! protected routes, the dedicated session verification endpoint, and the
//! application factory that wires them together.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
pub use config::AppConfig;
