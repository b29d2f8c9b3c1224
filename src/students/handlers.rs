use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use super::{
    dto::{InitStudentRequest, PreferencesUpdated, StudentQuery, UpdatePreferencesRequest},
    repo_types::StudentPreferences,
    services::{normalize_email, require_student_id},
};
use crate::{dto::MessageResponse, error::AppError, extract::AppJson, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/students/init-student", post(init_student))
        .route("/students/preferences", patch(update_preferences))
        .route("/students/info", get(get_info))
}

#[instrument(skip(state, payload))]
pub async fn init_student(
    State(state): State<AppState>,
    AppJson(payload): AppJson<InitStudentRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let student_id = require_student_id(payload.clerk_user_id)?;
    let email = normalize_email(payload.email)?;

    let created = state
        .store
        .init_student(&student_id, email.as_deref())
        .await
        .map_err(AppError::dependency("Failed to initialize student"))?;

    if created {
        info!(%student_id, "student initialized");
        Ok((StatusCode::CREATED, Json(MessageResponse::new("Student initialized"))))
    } else {
        Ok((StatusCode::OK, Json(MessageResponse::new("Student already exists"))))
    }
}

#[instrument(skip(state, payload))]
pub async fn update_preferences(
    State(state): State<AppState>,
    AppJson(payload): AppJson<UpdatePreferencesRequest>,
) -> Result<Json<PreferencesUpdated>, AppError> {
    let student_id = require_student_id(payload.clerk_user_id)?;
    if payload.patch.is_empty() {
        return Err(AppError::validation("No preferences to update"));
    }

    let data = state
        .store
        .update_student_preferences(&student_id, &payload.patch)
        .await
        .map_err(AppError::dependency("Failed to update preferences"))?
        .ok_or_else(|| {
            warn!(%student_id, "preferences update for unknown student");
            AppError::not_found("Student not found")
        })?;

    info!(%student_id, "preferences updated");
    Ok(Json(PreferencesUpdated {
        message: "Preferences updated",
        data,
    }))
}

#[instrument(skip(state))]
pub async fn get_info(
    State(state): State<AppState>,
    Query(q): Query<StudentQuery>,
) -> Result<Json<StudentPreferences>, AppError> {
    let student_id = require_student_id(q.clerk_user_id)?;
    let prefs = state
        .store
        .get_student_preferences(&student_id)
        .await
        .map_err(AppError::dependency("Failed to fetch student preferences"))?
        .ok_or_else(|| AppError::not_found("Student not found"))?;
    Ok(Json(prefs))
}
