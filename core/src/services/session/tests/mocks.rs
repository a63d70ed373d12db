//! Shared test doubles for the session services

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::Customer;
use crate::errors::AuthError;
use crate::repositories::MockCustomerRepository;
use crate::services::session::{
    IdentityResolver, MemorySessionCache, SessionCache, VerificationService,
};
use crate::services::token::{TokenConfig, TokenService};

pub const TEST_SECRET: &str = "session-test-secret";
pub const TEST_CACHE_TTL: u64 = 300;

/// A session cache whose every operation fails, for fail-open tests
pub struct FailingSessionCache {
    pub failures: AtomicUsize,
}

impl FailingSessionCache {
    pub fn new() -> Self {
        Self {
            failures: AtomicUsize::new(0),
        }
    }

    fn fail<T>(&self) -> Result<T, AuthError> {
        self.failures.fetch_add(1, Ordering::SeqCst);
        Err(AuthError::CacheUnavailable {
            message: "connection refused".to_string(),
        })
    }
}

#[async_trait]
impl SessionCache for FailingSessionCache {
    async fn get(&self, _customer_id: &str) -> Result<Option<Customer>, AuthError> {
        self.fail()
    }

    async fn set(&self, _customer: &Customer, _ttl_seconds: u64) -> Result<(), AuthError> {
        self.fail()
    }

    async fn invalidate(&self, _customer_id: &str) -> Result<(), AuthError> {
        self.fail()
    }
}

pub fn sample_customer(id: &str) -> Customer {
    Customer::new(id, "Jo Customer", format!("{}@example.com", id), None)
}

pub async fn seeded_repository(ids: &[&str]) -> Arc<MockCustomerRepository> {
    let repo = Arc::new(MockCustomerRepository::new());
    for id in ids {
        repo.insert(sample_customer(id)).await;
    }
    repo
}

pub fn resolver_with(
    repo: Arc<MockCustomerRepository>,
    cache: Arc<dyn SessionCache>,
) -> IdentityResolver {
    IdentityResolver::new(repo, cache, TEST_CACHE_TTL)
}

pub fn token_service() -> TokenService {
    TokenService::new(TokenConfig::new(TEST_SECRET)).unwrap()
}

pub async fn verification_service(ids: &[&str]) -> (VerificationService, Arc<MockCustomerRepository>) {
    let repo = seeded_repository(ids).await;
    let cache = Arc::new(MemorySessionCache::new());
    let resolver = resolver_with(repo.clone(), cache);
    (VerificationService::new(token_service(), resolver), repo)
}
