//! Repository interfaces for externally-owned data.

pub mod customer;

pub use customer::{CustomerRepository, MockCustomerRepository};
