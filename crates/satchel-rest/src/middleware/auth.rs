//! Access control middleware.

use crate::responses::AppError;
use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};
use satchel_core::SatchelError;
use satchel_security::TokenProvider;
use std::sync::Arc;
use tracing::debug;

/// State carried by the access control middleware.
#[derive(Clone)]
pub struct AuthGateState {
    pub token_provider: Arc<TokenProvider>,
}

impl AuthGateState {
    /// Creates the middleware state.
    #[must_use]
    pub fn new(token_provider: Arc<TokenProvider>) -> Self {
        Self { token_provider }
    }
}

/// Gate for protected routes.
///
/// Extracts the bearer token from the Authorization header and verifies
/// its signature and expiry. A missing, malformed, invalid, or expired
/// token short-circuits with 401 and the handler never runs. On success
/// the decoded claims are attached to the request extensions.
pub async fn require_auth(
    State(state): State<AuthGateState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError(SatchelError::unauthorized("Missing authorization header")))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError(SatchelError::unauthorized("Invalid authorization format")))?;

    let claims = state.token_provider.validate_token(token).map_err(AppError)?;

    debug!("Authenticated user: {}", claims.username);
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::CurrentUser;
    use axum::{http::StatusCode, middleware, routing::get, Router};
    use satchel_config::SecurityConfig;
    use satchel_core::UserId;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tower::ServiceExt;

    fn test_provider() -> Arc<TokenProvider> {
        Arc::new(TokenProvider::new(Arc::new(SecurityConfig {
            jwt_secret: "test-secret-key-for-testing-only".to_string(),
            jwt_expiration_secs: 3600,
        })))
    }

    /// Router with a counting handler so tests can assert the handler
    /// never ran on rejected requests.
    fn test_router(provider: Arc<TokenProvider>, hits: Arc<AtomicU32>) -> Router {
        let gate = AuthGateState::new(provider);
        Router::new()
            .route(
                "/protected",
                get(move |user: CurrentUser| {
                    let hits = hits.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        user.username.clone()
                    }
                }),
            )
            .route_layer(middleware::from_fn_with_state(gate, require_auth))
    }

    fn request(auth_header: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/protected").method("GET");
        if let Some(value) = auth_header {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_missing_header_rejected() {
        let hits = Arc::new(AtomicU32::new(0));
        let router = test_router(test_provider(), hits.clone());

        let response = router.oneshot(request(None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_rejected() {
        let hits = Arc::new(AtomicU32::new(0));
        let router = test_router(test_provider(), hits.clone());

        let response = router
            .oneshot(request(Some("Basic dXNlcjpwYXNz")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_garbage_token_rejected() {
        let hits = Arc::new(AtomicU32::new(0));
        let router = test_router(test_provider(), hits.clone());

        let response = router
            .oneshot(request(Some("Bearer not.a.token")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_token_from_other_secret_rejected() {
        let hits = Arc::new(AtomicU32::new(0));
        let router = test_router(test_provider(), hits.clone());

        let other = TokenProvider::new(Arc::new(SecurityConfig {
            jwt_secret: "a-completely-different-secret".to_string(),
            jwt_expiration_secs: 3600,
        }));
        let token = other.generate_token(UserId::new(), "ash01").unwrap();

        let response = router
            .oneshot(request(Some(&format!("Bearer {}", token))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_valid_token_admitted() {
        let hits = Arc::new(AtomicU32::new(0));
        let provider = test_provider();
        let router = test_router(provider.clone(), hits.clone());

        let token = provider.generate_token(UserId::new(), "ash01").unwrap();

        let response = router
            .oneshot(request(Some(&format!("Bearer {}", token))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
