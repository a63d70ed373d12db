//! Value objects for the session-authentication domain.

pub mod verification;

pub use verification::{VerifyAction, VerifyOutcome};
