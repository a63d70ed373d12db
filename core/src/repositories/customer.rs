//! Customer lookup interface.
//!
//! The customer entity is owned by the surrounding system; this subsystem
//! only consumes a "lookup by id" capability. The trait is async-first and
//! implemented by the surrounding system's data layer.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::Customer;
use crate::errors::AuthError;

/// Authoritative customer fetch, supplied by the surrounding system
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find a customer by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Customer))` - Customer found
    /// * `Ok(None)` - No customer with the given ID
    /// * `Err(AuthError)` - Lookup failed (store unreachable, etc.)
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, AuthError>;
}

/// In-memory customer repository for testing and wiring examples.
///
/// Counts lookups so tests can assert how often the authoritative store was
/// actually consulted.
pub struct MockCustomerRepository {
    customers: Arc<RwLock<HashMap<String, Customer>>>,
    lookups: AtomicUsize,
}

impl MockCustomerRepository {
    /// Create an empty mock repository
    pub fn new() -> Self {
        Self {
            customers: Arc::new(RwLock::new(HashMap::new())),
            lookups: AtomicUsize::new(0),
        }
    }

    /// Insert a customer record
    pub async fn insert(&self, customer: Customer) {
        let mut customers = self.customers.write().await;
        customers.insert(customer.id.clone(), customer);
    }

    /// Remove a customer record
    pub async fn remove(&self, id: &str) {
        let mut customers = self.customers.write().await;
        customers.remove(id);
    }

    /// Number of `find_by_id` calls made so far
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl Default for MockCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerRepository for MockCustomerRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, AuthError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let customers = self.customers.read().await;
        Ok(customers.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_repository_counts_lookups() {
        let repo = MockCustomerRepository::new();
        repo.insert(Customer::new("c1", "Jo", "jo@example.com", None))
            .await;

        assert!(repo.find_by_id("c1").await.unwrap().is_some());
        assert!(repo.find_by_id("missing").await.unwrap().is_none());
        assert_eq!(repo.lookup_count(), 2);
    }
}
