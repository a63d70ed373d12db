//! Shared utilities and common types for the ShopEase server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Standard API response envelope

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AuthConfig, CacheConfig, ConfigError, ServerConfig};
pub use types::{ApiResponse, ErrorBody};
