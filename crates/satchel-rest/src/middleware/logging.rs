//! Request logging middleware.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::info;

/// Logs method, path, status, and latency for every request.
pub async fn request_logger(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed = start.elapsed();
    let status = response.status();

    info!(
        target: "http",
        method = %method,
        path = %path,
        status = %status.as_u16(),
        duration_ms = %elapsed.as_millis(),
        "HTTP request completed"
    );

    response
}
