//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use satchel_core::{ErrorResponse, SatchelError};

/// Application error type for Axum.
///
/// Wraps the core error and renders it as `(status, ErrorResponse)`.
#[derive(Debug)]
pub struct AppError(pub SatchelError);

impl From<SatchelError> for AppError {
    fn from(err: SatchelError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = Json(ErrorResponse::from_error(&self.0));

        (status, body).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;
