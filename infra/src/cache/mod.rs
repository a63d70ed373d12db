//! Cache module for Redis-based session caching
//!
//! Provides the Redis client (connection management, retry logic) and the
//! session cache built on top of it.

pub mod redis_client;
pub mod session_cache;

pub use redis_client::RedisClient;
pub use session_cache::RedisSessionCache;

// Re-export commonly used types
pub use se_shared::config::CacheConfig;
