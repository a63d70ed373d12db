//! Domain entities representing core business objects.

pub mod claims;
pub mod customer;

// Re-export commonly used types
pub use claims::{Claims, TokenPair};
pub use customer::Customer;
