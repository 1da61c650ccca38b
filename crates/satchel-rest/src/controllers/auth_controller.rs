//! Authentication controller.

use crate::{
    extractors::ValidatedJson,
    responses::{ApiResult, AppError},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use satchel_service::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
use tracing::debug;

/// Creates the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user.
async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    debug!("Registration request for: {}", request.username);

    let response = state.auth_service.register(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with username and password.
async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<LoginResponse> {
    debug!("Login request for: {}", request.username);

    let response = state.auth_service.login(request).await?;
    Ok(Json(response))
}
