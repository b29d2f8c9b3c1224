use anyhow::Context;
use sqlx::PgPool;

use super::repo_types::{PreferencesPatch, StudentPreferences};

/// Inserts the student unless it exists. Returns `true` on insert.
pub async fn init_student(db: &PgPool, id: &str, email: Option<&str>) -> anyhow::Result<bool> {
    let res = sqlx::query(
        r#"
        INSERT INTO students (id, email)
        VALUES ($1, $2)
        ON CONFLICT (id) DO NOTHING
        "#,
    )
    .bind(id)
    .bind(email)
    .execute(db)
    .await
    .context("insert student")?;
    Ok(res.rows_affected() > 0)
}

pub async fn get_preferences(db: &PgPool, id: &str) -> anyhow::Result<Option<StudentPreferences>> {
    let row = sqlx::query_as::<_, StudentPreferences>(
        r#"
        SELECT is_veg, is_vegan, is_gluten_free, allergens
          FROM students
         WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
    .context("select student preferences")?;
    Ok(row)
}

pub async fn update_preferences(
    db: &PgPool,
    id: &str,
    patch: &PreferencesPatch,
) -> anyhow::Result<Option<StudentPreferences>> {
    let row = sqlx::query_as::<_, StudentPreferences>(
        r#"
        UPDATE students
           SET is_veg = COALESCE($2, is_veg),
               is_vegan = COALESCE($3, is_vegan),
               is_gluten_free = COALESCE($4, is_gluten_free),
               allergens = COALESCE($5, allergens)
         WHERE id = $1
        RETURNING is_veg, is_vegan, is_gluten_free, allergens
        "#,
    )
    .bind(id)
    .bind(patch.is_veg)
    .bind(patch.is_vegan)
    .bind(patch.is_gluten_free)
    .bind(&patch.allergens)
    .fetch_optional(db)
    .await
    .context("update student preferences")?;
    Ok(row)
}
