//! Token service module for JWT management
//!
//! This module handles all token-related operations:
//! - Access/refresh token issuance with independent expirations
//! - Verification with an explicit expired/invalid split

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenConfig;
pub use service::TokenService;
