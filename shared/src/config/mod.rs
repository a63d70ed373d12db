//! Configuration management for all server modules
//!
//! Each configuration struct carries a `from_env` constructor so binaries can
//! be wired entirely from environment variables (with `.env` support in the
//! API binary).

pub mod auth;
pub mod cache;
pub mod server;

pub use auth::{AuthConfig, ConfigError};
pub use cache::CacheConfig;
pub use server::ServerConfig;
