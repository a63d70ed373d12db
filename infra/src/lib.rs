//! # Infrastructure Layer
//!
//! Concrete implementations for the session-authentication stack's external
//! services. Currently this is the Redis-backed session cache; the
//! authoritative customer store stays behind the `se_core` repository trait
//! and is implemented by the surrounding system.

/// Cache module - Redis client and the session cache implementation
pub mod cache;

pub use cache::{RedisClient, RedisSessionCache};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
