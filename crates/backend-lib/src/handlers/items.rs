// ============================
// crates/backend-lib/src/handlers/items.rs
// ============================
//! Item CRUD routes. Everything here runs behind the authorization gate;
//! the resolved identity arrives as a request extension.
use crate::auth::CurrentUser;
use crate::error::AppError;
use crate::metrics as keys;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use ::metrics::counter;
use taskboard_common::{CreateItemRequest, ItemBody, UpdateItemRequest};

/// `GET /api/todos`
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<ItemBody>> {
    Json(state.items.list())
}

/// `GET /api/todos/{id}`
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ItemBody>, AppError> {
    state
        .items
        .get(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("item {id}")))
}

/// `POST /api/todos`
pub async fn create_item(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<ItemBody>), AppError> {
    if req.title.is_empty() {
        return Err(AppError::Validation("title".to_string()));
    }

    let item = state.items.create(req.title);
    counter!(keys::ITEM_CREATED).increment(1);
    tracing::debug!(username = %user.username, item_id = %item.id, "item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// `PUT /api/todos/{id}`
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<Json<ItemBody>, AppError> {
    if matches!(&req.title, Some(title) if title.is_empty()) {
        return Err(AppError::Validation("title".to_string()));
    }

    state
        .items
        .update(&id, req.title, req.completed)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("item {id}")))
}

/// `DELETE /api/todos/{id}`
pub async fn delete_item(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.items.remove(&id) {
        counter!(keys::ITEM_DELETED).increment(1);
        tracing::debug!(username = %user.username, item_id = %id, "item deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("item {id}")))
    }
}
