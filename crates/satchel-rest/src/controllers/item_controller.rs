//! Item controller.
//!
//! All routes here sit behind the access control middleware; handlers can
//! assume an admitted request with claims attached.

use crate::{
    extractors::{CurrentUser, ValidatedJson},
    responses::{ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use satchel_core::{ItemId, SatchelError};
use satchel_service::{CreateItemRequest, ItemResponse, MessageResponse, UpdateItemRequest};
use tracing::debug;

/// Creates the item router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_item).get(list_items))
        .route(
            "/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
}

/// A malformed id cannot name any stored item.
fn parse_item_id(raw: &str) -> Result<ItemId, AppError> {
    ItemId::parse(raw).map_err(|_| AppError(SatchelError::not_found("Item", raw)))
}

/// Create a new item.
async fn create_item(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(request): ValidatedJson<CreateItemRequest>,
) -> Result<(StatusCode, Json<ItemResponse>), AppError> {
    debug!("Create item '{}' by {}", request.name, user.username);

    let response = state.item_service.create_item(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// List all items.
async fn list_items(State(state): State<AppState>) -> ApiResult<Vec<ItemResponse>> {
    let response = state.item_service.list_items().await?;
    Ok(Json(response))
}

/// Get a single item.
async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ItemResponse> {
    let id = parse_item_id(&id)?;
    let response = state.item_service.get_item(id).await?;
    Ok(Json(response))
}

/// Apply a partial update to an item.
async fn update_item(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateItemRequest>,
) -> ApiResult<ItemResponse> {
    debug!("Update item {} by {}", id, user.username);

    let id = parse_item_id(&id)?;
    let response = state.item_service.update_item(id, request).await?;
    Ok(Json(response))
}

/// Delete an item.
async fn delete_item(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<MessageResponse> {
    debug!("Delete item {} by {}", id, user.username);

    let id = parse_item_id(&id)?;
    let response = state.item_service.delete_item(id).await?;
    Ok(Json(response))
}
