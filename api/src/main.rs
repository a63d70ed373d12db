//! API server entry point
//!
//! Wires configuration, the token service, the Redis-backed session cache,
//! and the verification state machine into the actix application. The
//! authoritative customer store belongs to the storefront service; the
//! in-memory repository here keeps the binary runnable standalone.

use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use se_api::{create_app, AppConfig, AppState};
use se_core::repositories::MockCustomerRepository;
use se_core::services::session::{
    IdentityResolver, MemorySessionCache, SessionCache, VerificationService,
};
use se_core::services::token::{TokenConfig, TokenService};
use se_infra::{RedisClient, RedisSessionCache};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ShopEase session-authentication API");

    // Missing JWT_SECRET aborts startup here, before anything binds
    let config = AppConfig::from_env()?;

    let token_service = TokenService::new(TokenConfig::from(&config.auth))?;

    // The cache is an optimization: when Redis is unreachable the server
    // still starts, degraded to an in-process cache
    let session_cache: Arc<dyn SessionCache> = match RedisClient::new(config.cache.clone()).await {
        Ok(client) => {
            info!("Session cache backed by Redis");
            Arc::new(RedisSessionCache::new(client))
        }
        Err(e) => {
            warn!("Redis unavailable ({}); using in-process session cache", e);
            Arc::new(MemorySessionCache::new())
        }
    };

    let customers = Arc::new(MockCustomerRepository::new());
    let resolver = IdentityResolver::new(customers, session_cache, config.cache.default_ttl);
    let verification = Arc::new(VerificationService::new(token_service, resolver));

    let state = web::Data::new(AppState::new(verification));
    let bind_address = config.server.bind_address();
    info!("Server binding to {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone()));
    // workers == 0 means "one per core", actix's default
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }
    server.bind(&bind_address)?.run().await?;

    Ok(())
}
