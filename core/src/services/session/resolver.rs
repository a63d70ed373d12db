//! Identity resolution with a read-through session cache

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::Customer;
use crate::errors::AuthError;
use crate::repositories::CustomerRepository;

use super::cache::SessionCache;

/// Maps a verified subject id to a customer identity.
///
/// Read-through against the session cache: a hit returns the cached value
/// and resets its TTL; a miss goes to the authoritative store and populates
/// the cache. A customer that does not exist is never cached as a positive
/// result, and any cache failure degrades to a miss.
pub struct IdentityResolver {
    customers: Arc<dyn CustomerRepository>,
    cache: Arc<dyn SessionCache>,
    cache_ttl_seconds: u64,
}

impl IdentityResolver {
    /// Creates a new resolver
    ///
    /// # Arguments
    ///
    /// * `customers` - Authoritative customer lookup
    /// * `cache` - Session cache implementation
    /// * `cache_ttl_seconds` - TTL applied on every cache write
    pub fn new(
        customers: Arc<dyn CustomerRepository>,
        cache: Arc<dyn SessionCache>,
        cache_ttl_seconds: u64,
    ) -> Self {
        Self {
            customers,
            cache,
            cache_ttl_seconds,
        }
    }

    /// Resolves a customer identity by subject id
    ///
    /// # Returns
    ///
    /// * `Ok(Customer)` - Identity resolved (from cache or store)
    /// * `Err(AuthError::IdentityNotFound)` - No such customer
    /// * `Err(AuthError::Repository)` - The authoritative lookup failed
    pub async fn resolve(&self, customer_id: &str) -> Result<Customer, AuthError> {
        match self.cache.get(customer_id).await {
            Ok(Some(customer)) => {
                debug!(customer_id, "session cache hit");
                // Read-through hit refreshes the TTL; failure to do so is
                // harmless, the entry just expires on its original schedule
                if let Err(e) = self.cache.set(&customer, self.cache_ttl_seconds).await {
                    warn!(customer_id, error = %e, "failed to refresh session cache TTL");
                }
                return Ok(customer);
            }
            Ok(None) => {
                debug!(customer_id, "session cache miss");
            }
            Err(e) => {
                // The cache is an optimization; treat errors as misses
                warn!(customer_id, error = %e, "session cache read failed; falling back to store");
            }
        }

        match self.customers.find_by_id(customer_id).await? {
            Some(customer) => {
                if let Err(e) = self.cache.set(&customer, self.cache_ttl_seconds).await {
                    warn!(customer_id, error = %e, "failed to populate session cache");
                }
                Ok(customer)
            }
            None => {
                debug!(customer_id, "customer not found in authoritative store");
                Err(AuthError::IdentityNotFound)
            }
        }
    }

    /// Evicts a cached identity
    ///
    /// Called by the profile-update collaborator whenever the underlying
    /// customer record changes. Cache failures are swallowed; the stale entry
    /// then ages out on its TTL.
    pub async fn invalidate(&self, customer_id: &str) {
        if let Err(e) = self.cache.invalidate(customer_id).await {
            warn!(customer_id, error = %e, "failed to invalidate session cache entry");
        }
    }
}
