//! # Satchel Server
//!
//! Main entry point for the Satchel application: loads configuration,
//! constructs the database pool and cache, wires the services together,
//! and serves the REST API until a shutdown signal arrives.

use satchel_config::ConfigLoader;
use satchel_core::{SatchelError, SatchelResult};
use satchel_repository::{create_pool, MySqlItemRepository, MySqlUserRepository};
use satchel_rest::{create_router, middleware::AuthGateState, AppState};
use satchel_security::{PasswordHasher, TokenProvider};
use satchel_service::{AuthServiceImpl, CacheInterface, ItemServiceImpl, RedisCacheService};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod startup;

#[tokio::main]
async fn main() {
    init_logging();

    info!("Starting Satchel server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber, honoring `RUST_LOG`.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

async fn run() -> SatchelResult<()> {
    // Load configuration
    let config = ConfigLoader::from_default_location().load()?;
    info!("Environment: {}", config.app.environment);

    startup::print_banner();

    // Create database pool and bring the schema up to date
    let db_pool = create_pool(&config.database).await?;
    db_pool.run_migrations().await?;

    // Optional Redis cache; disabled configuration degrades to always-miss
    let cache: Arc<dyn CacheInterface> = Arc::new(RedisCacheService::connect(&config.redis)?);

    // Security primitives
    let password_hasher = Arc::new(PasswordHasher::new());
    let token_provider = Arc::new(TokenProvider::new(Arc::new(config.security.clone())));

    // Repositories over the shared pool
    let user_repository = Arc::new(MySqlUserRepository::new(db_pool.clone()));
    let item_repository = Arc::new(MySqlItemRepository::new(db_pool.clone()));

    // Services with explicitly injected dependencies
    let auth_service = Arc::new(AuthServiceImpl::new(
        user_repository,
        password_hasher,
        token_provider.clone(),
    ));
    let item_service = Arc::new(ItemServiceImpl::new(
        item_repository,
        cache,
        config.redis.cache_ttl(),
    ));

    let state = AppState::new(auth_service, item_service);
    let auth_state = AuthGateState::new(token_provider);
    let router = create_router(state, auth_state, &config.server);

    let addr = config.server.addr();
    startup::print_startup_info(&addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| SatchelError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| SatchelError::Internal(format!("Server error: {}", e)))?;

    db_pool.close().await;
    info!("Server stopped");
    Ok(())
}

/// Completes when a shutdown signal (ctrl-c) is received.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
