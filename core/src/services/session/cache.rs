//! Session cache seam
//!
//! The cache stores resolved customer identities keyed by customer id. It is
//! an optimization, never a source of truth: callers must treat every cache
//! failure as a miss and fall back to the authoritative lookup.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::Customer;
use crate::errors::AuthError;

/// Side cache of resolved identities, keyed by customer id
#[async_trait]
pub trait SessionCache: Send + Sync {
    /// Fetch a cached identity
    async fn get(&self, customer_id: &str) -> Result<Option<Customer>, AuthError>;

    /// Store an identity with a TTL in seconds
    async fn set(&self, customer: &Customer, ttl_seconds: u64) -> Result<(), AuthError>;

    /// Evict an identity (profile mutation, failed resolution)
    async fn invalidate(&self, customer_id: &str) -> Result<(), AuthError>;
}

/// In-process session cache
///
/// Used by tests and as a fallback wiring when no Redis is available.
/// Expiry is checked lazily on read.
pub struct MemorySessionCache {
    entries: Arc<RwLock<HashMap<String, (Customer, Instant)>>>,
}

impl MemorySessionCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of live entries (expired entries excluded)
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        let entries = self.entries.read().await;
        entries.values().filter(|(_, exp)| *exp > now).count()
    }

    /// Whether the cache holds no live entries
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemorySessionCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionCache for MemorySessionCache {
    async fn get(&self, customer_id: &str) -> Result<Option<Customer>, AuthError> {
        let entries = self.entries.read().await;
        match entries.get(customer_id) {
            Some((customer, expires_at)) if *expires_at > Instant::now() => {
                Ok(Some(customer.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn set(&self, customer: &Customer, ttl_seconds: u64) -> Result<(), AuthError> {
        let expires_at = Instant::now() + Duration::from_secs(ttl_seconds);
        let mut entries = self.entries.write().await;
        entries.insert(customer.id.clone(), (customer.clone(), expires_at));
        Ok(())
    }

    async fn invalidate(&self, customer_id: &str) -> Result<(), AuthError> {
        let mut entries = self.entries.write().await;
        entries.remove(customer_id);
        Ok(())
    }
}
