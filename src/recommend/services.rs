use tracing::{info, warn};

use super::{aggregate::aggregate, filter::filter, rank::rank, rank::RecommendationResult};
use crate::{error::AppError, store::DiningStore};

/// Fetches the menu, preferences and likes concurrently, then runs
/// aggregate -> filter -> rank. Any failed fetch aborts the whole request.
pub async fn recommend_for_student(
    store: &dyn DiningStore,
    student_id: &str,
    top_picks: usize,
) -> Result<RecommendationResult, AppError> {
    let (entries, prefs, liked) = tokio::try_join!(
        async {
            store
                .list_menu_entries()
                .await
                .map_err(AppError::dependency("Failed to fetch today's meals"))
        },
        async {
            store
                .get_student_preferences(student_id)
                .await
                .map_err(AppError::dependency("Failed to fetch student preferences"))
        },
        async {
            store
                .liked_food_ids(student_id)
                .await
                .map_err(AppError::dependency("Failed to fetch liked foods"))
        },
    )?;

    let Some(prefs) = prefs else {
        warn!(student_id, "no preference record for student");
        return Err(AppError::dependency("Failed to fetch student preferences")(
            anyhow::anyhow!("no student record for {student_id}"),
        ));
    };

    let total_entries = entries.len();
    let dishes = filter(aggregate(entries, &liked), &prefs);
    let result = rank(dishes, top_picks);

    info!(
        student_id,
        menu_entries = total_entries,
        top_picks = result.top_picks.len(),
        remainder = result.remainder.len(),
        "recommendations computed"
    );
    Ok(result)
}
