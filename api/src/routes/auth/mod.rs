//! Authentication routes

pub mod verify;

pub use verify::verify_session;
