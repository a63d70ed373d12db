//! Session services: identity resolution and the verification state machine
//!
//! This module decides whether a request may proceed:
//! - `SessionCache` is the non-authoritative identity cache seam
//! - `IdentityResolver` materializes a customer through the cache
//! - `VerificationService` runs the allow / rotate / redirect state machine

mod cache;
mod resolver;
mod verifier;

#[cfg(test)]
mod tests;

pub use cache::{MemorySessionCache, SessionCache};
pub use resolver::IdentityResolver;
pub use verifier::VerificationService;
