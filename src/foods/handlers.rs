use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::{instrument, warn};

use super::{
    dto::{FoodForm, FoodInfoUpdate, PhotoUpload},
    repo_types::FoodInfo,
    services::{create_food, delete_food, update_food},
};
use crate::{dto::MessageResponse, error::AppError, extract::AppJson, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/meals/food-info", get(list_food_info).post(create_food_info))
        .route(
            "/meals/food-info/:id",
            put(update_food_info).delete(delete_food_info),
        )
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024)) // 10MB
}

#[instrument(skip(state))]
pub async fn list_food_info(State(state): State<AppState>) -> Result<Json<Vec<FoodInfo>>, AppError> {
    let rows = state
        .store
        .list_food_info()
        .await
        .map_err(AppError::dependency("Failed to fetch food items"))?;
    Ok(Json(rows))
}

async fn read_form(mut mp: Multipart) -> Result<FoodForm, AppError> {
    let mut form = FoodForm::default();
    loop {
        let field = match mp.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "malformed multipart body");
                return Err(AppError::validation("Malformed form data"));
            }
        };
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        if name == "photo" {
            let content_type = field
                .content_type()
                .map(str::to_string)
                .unwrap_or_else(|| "application/octet-stream".into());
            let file_name = field.file_name().map(str::to_string);
            let body = field
                .bytes()
                .await
                .map_err(|_| AppError::validation("Malformed form data"))?;
            if !body.is_empty() {
                form.photo = Some(PhotoUpload {
                    body,
                    content_type,
                    file_name,
                });
            }
        } else {
            let text = field
                .text()
                .await
                .map_err(|_| AppError::validation("Malformed form data"))?;
            form.fields.insert(name, text);
        }
    }
    Ok(form)
}

/// POST /meals/food-info (multipart, optional `photo` file)
#[instrument(skip(state, mp))]
pub async fn create_food_info(
    State(state): State<AppState>,
    mp: Multipart,
) -> Result<(StatusCode, Json<FoodInfo>), AppError> {
    let form = read_form(mp).await?;
    let row = create_food(&state, form).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

#[instrument(skip(state, payload))]
pub async fn update_food_info(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(payload): AppJson<FoodInfoUpdate>,
) -> Result<Json<FoodInfo>, AppError> {
    Ok(Json(update_food(&state, id, payload).await?))
}

#[instrument(skip(state))]
pub async fn delete_food_info(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    delete_food(&state, id).await?;
    Ok(Json(MessageResponse::new("Food item deleted successfully")))
}
