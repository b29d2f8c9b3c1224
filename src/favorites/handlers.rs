use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use super::{
    dto::{FavoriteRequest, FavoritesQuery},
    repo_types::LikedFood,
};
use crate::{
    dto::MessageResponse, error::AppError, extract::AppJson, state::AppState,
    students::services::require_student_id,
};

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/favorites",
        get(list_favorites).post(add_favorite).delete(remove_favorite),
    )
}

fn require_pair(req: FavoriteRequest) -> Result<(String, i64), AppError> {
    let student_id = req
        .clerk_user_id
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    match (student_id, req.food_id) {
        (Some(s), Some(f)) => Ok((s, f)),
        _ => Err(AppError::validation("Missing clerk_user_id or food_id")),
    }
}

/// Liking an already liked food is a no-op success.
#[instrument(skip(state, payload))]
pub async fn add_favorite(
    State(state): State<AppState>,
    AppJson(payload): AppJson<FavoriteRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let (student_id, food_id) = require_pair(payload)?;
    let added = state
        .store
        .add_liked_food(&student_id, food_id)
        .await
        .map_err(AppError::dependency("Failed to add favorite"))?;

    if added {
        info!(%student_id, food_id, "favorite added");
        Ok((StatusCode::CREATED, Json(MessageResponse::new("Favorite added"))))
    } else {
        Ok((StatusCode::OK, Json(MessageResponse::new("Already favorited"))))
    }
}

#[instrument(skip(state, payload))]
pub async fn remove_favorite(
    State(state): State<AppState>,
    AppJson(payload): AppJson<FavoriteRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let (student_id, food_id) = require_pair(payload)?;
    state
        .store
        .remove_liked_food(&student_id, food_id)
        .await
        .map_err(AppError::dependency("Failed to remove favorite"))?;
    info!(%student_id, food_id, "favorite removed");
    Ok(Json(MessageResponse::new("Favorite removed")))
}

#[instrument(skip(state))]
pub async fn list_favorites(
    State(state): State<AppState>,
    Query(q): Query<FavoritesQuery>,
) -> Result<Json<Vec<LikedFood>>, AppError> {
    let student_id = require_student_id(q.clerk_user_id)?;
    let rows = state
        .store
        .list_liked_foods(&student_id)
        .await
        .map_err(AppError::dependency("Failed to fetch liked foods"))?;
    Ok(Json(rows))
}
