//! Redis-backed session cache
//!
//! Stores resolved customer identities as JSON under `session:customer:{id}`
//! keys. Entries expire via Redis TTL; every write refreshes the TTL, which
//! is how read-through callers keep hot sessions warm.

use async_trait::async_trait;
use tracing::{debug, warn};

use se_core::domain::entities::Customer;
use se_core::errors::AuthError;
use se_core::services::session::SessionCache;

use super::redis_client::RedisClient;

/// Key prefix for cached customer identities
const SESSION_KEY_PREFIX: &str = "session:customer:";

/// Redis implementation of the session cache
#[derive(Clone)]
pub struct RedisSessionCache {
    client: RedisClient,
}

impl RedisSessionCache {
    /// Create a new Redis session cache on top of an existing client
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    /// Build the Redis key for a customer id
    fn session_key(customer_id: &str) -> String {
        format!("{}{}", SESSION_KEY_PREFIX, customer_id)
    }
}

#[async_trait]
impl SessionCache for RedisSessionCache {
    async fn get(&self, customer_id: &str) -> Result<Option<Customer>, AuthError> {
        let key = Self::session_key(customer_id);

        let payload = self
            .client
            .get(&key)
            .await
            .map_err(|e| AuthError::CacheUnavailable {
                message: e.to_string(),
            })?;

        match payload {
            Some(json) => match serde_json::from_str::<Customer>(&json) {
                Ok(customer) => {
                    debug!("Session cache hit for customer {}", customer_id);
                    Ok(Some(customer))
                }
                Err(e) => {
                    // A corrupt entry is unusable; drop it and report a miss
                    warn!(
                        "Discarding corrupt session cache entry for customer {}: {}",
                        customer_id, e
                    );
                    let _ = self.client.delete(&key).await;
                    Ok(None)
                }
            },
            None => {
                debug!("Session cache miss for customer {}", customer_id);
                Ok(None)
            }
        }
    }

    async fn set(&self, customer: &Customer, ttl_seconds: u64) -> Result<(), AuthError> {
        let key = Self::session_key(&customer.id);

        let json = serde_json::to_string(customer).map_err(|e| AuthError::CacheUnavailable {
            message: format!("Failed to serialize customer: {}", e),
        })?;

        self.client
            .set_with_expiry(&key, &json, ttl_seconds)
            .await
            .map_err(|e| AuthError::CacheUnavailable {
                message: e.to_string(),
            })?;

        debug!(
            "Cached session for customer {} with TTL {}s",
            customer.id, ttl_seconds
        );
        Ok(())
    }

    async fn invalidate(&self, customer_id: &str) -> Result<(), AuthError> {
        let key = Self::session_key(customer_id);

        let deleted = self
            .client
            .delete(&key)
            .await
            .map_err(|e| AuthError::CacheUnavailable {
                message: e.to_string(),
            })?;

        if deleted {
            debug!("Invalidated cached session for customer {}", customer_id);
        }
        Ok(())
    }
}
