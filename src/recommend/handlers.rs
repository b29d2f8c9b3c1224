use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::{aggregate::AggregatedDish, dto::RecommendationQuery, services::recommend_for_student};
use crate::{error::AppError, state::AppState, students::services::require_student_id};

pub fn routes() -> Router<AppState> {
    Router::new().route("/students/recommendations", get(get_recommendations))
}

/// Top picks first, then the rest of the eligible dishes by health score.
#[instrument(skip(state))]
pub async fn get_recommendations(
    State(state): State<AppState>,
    Query(q): Query<RecommendationQuery>,
) -> Result<Json<Vec<AggregatedDish>>, AppError> {
    let student_id = require_student_id(q.clerk_user_id)?;
    let result =
        recommend_for_student(state.store.as_ref(), &student_id, state.config.top_picks).await?;
    Ok(Json(result.into_ranked_list()))
}
