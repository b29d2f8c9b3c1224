use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;

/// A (student, food) "like". At most one row per pair.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct LikedFood {
    pub student_id: String,
    pub food_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
