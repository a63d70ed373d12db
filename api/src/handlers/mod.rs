//! Request handler support types

pub mod error;

pub use error::ApiError;
