use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument};

use super::{
    dto::MenuItemRequest,
    repo_types::{MenuEntry, MenuItem},
    services::{new_menu_item, today},
};
use crate::{dto::MessageResponse, error::AppError, extract::AppJson, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/meals/week-menu", get(list_week_menu).post(create_menu_item))
        .route(
            "/meals/week-menu/:id",
            put(update_menu_item).delete(delete_menu_item),
        )
}

#[instrument(skip(state))]
pub async fn list_week_menu(
    State(state): State<AppState>,
) -> Result<Json<Vec<MenuEntry>>, AppError> {
    let entries = state
        .store
        .list_menu_entries()
        .await
        .map_err(AppError::dependency("Failed to fetch week menu"))?;
    Ok(Json(entries))
}

#[instrument(skip(state, payload))]
pub async fn create_menu_item(
    State(state): State<AppState>,
    AppJson(payload): AppJson<MenuItemRequest>,
) -> Result<(StatusCode, Json<MenuItem>), AppError> {
    let item = new_menu_item(payload, today())?;
    let row = state
        .store
        .insert_menu_item(item)
        .await
        .map_err(AppError::dependency("Failed to add menu item"))?;
    info!(menu_item_id = row.id, food_info_id = row.food_info_id, "menu item added");
    Ok((StatusCode::CREATED, Json(row)))
}

#[instrument(skip(state, payload))]
pub async fn update_menu_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(payload): AppJson<MenuItemRequest>,
) -> Result<Json<MenuItem>, AppError> {
    let item = new_menu_item(payload, today())?;
    let row = state
        .store
        .update_menu_item(id, item)
        .await
        .map_err(AppError::dependency("Failed to update menu item"))?
        .ok_or_else(|| AppError::not_found("Menu item not found"))?;
    Ok(Json(row))
}

#[instrument(skip(state))]
pub async fn delete_menu_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let deleted = state
        .store
        .delete_menu_item(id)
        .await
        .map_err(AppError::dependency("Failed to delete menu item"))?;
    if !deleted {
        return Err(AppError::not_found("Menu item not found"));
    }
    info!(menu_item_id = id, "menu item deleted");
    Ok(Json(MessageResponse::new("Menu item deleted successfully")))
}
