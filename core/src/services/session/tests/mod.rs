//! Tests for the session services

#[cfg(test)]
mod mocks;
