//! Main application router.

use crate::{
    controllers::{auth_controller, health_controller, item_controller},
    middleware::{request_logger, require_auth, AuthGateState},
    state::AppState,
};
use axum::{middleware, routing::get, Router};
use satchel_config::ServerConfig;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Creates the main application router.
///
/// Auth routes are open; item routes sit behind the access control
/// middleware, which rejects unauthenticated requests before any handler
/// runs.
pub fn create_router(
    state: AppState,
    auth_state: AuthGateState,
    server_config: &ServerConfig,
) -> Router {
    let cors = create_cors_layer(server_config);

    let item_routes = item_controller::router()
        .route_layer(middleware::from_fn_with_state(auth_state, require_auth));

    let router = Router::new()
        .nest("/api/auth", auth_controller::router())
        .nest("/api/items", item_routes)
        .merge(health_controller::router())
        .route("/", get(root))
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_logger));

    info!("Router created with auth and item endpoints");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if server_config.cors_enabled {
        if server_config.cors_origins.contains(&"*".to_string()) {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    } else {
        CorsLayer::new()
    }
}

/// Root endpoint handler.
async fn root() -> &'static str {
    "Satchel API"
}
