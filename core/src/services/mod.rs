//! Business services containing domain logic and use cases.

pub mod session;
pub mod token;

// Re-export commonly used types
pub use session::{IdentityResolver, MemorySessionCache, SessionCache, VerificationService};
pub use token::{TokenConfig, TokenService};
