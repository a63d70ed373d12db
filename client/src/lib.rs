//! # Client-Side Session Handling
//!
//! Outbound-call support for services and apps that talk to the
//! session-authentication API: a token store, a single-flight refresh
//! coordinator, and an HTTP client wrapper that retries a 401 exactly once
//! after refreshing.

pub mod coordinator;
pub mod error;
pub mod http;
pub mod tokens;

pub use coordinator::RefreshCoordinator;
pub use error::ClientError;
pub use http::AuthorizedClient;
pub use tokens::SessionTokens;
