use std::collections::HashSet;

use anyhow::Context;
use sqlx::PgPool;

use super::repo_types::LikedFood;

pub async fn liked_food_ids(db: &PgPool, student_id: &str) -> anyhow::Result<HashSet<i64>> {
    let ids: Vec<(i64,)> = sqlx::query_as("SELECT food_id FROM liked_foods WHERE student_id = $1")
        .bind(student_id)
        .fetch_all(db)
        .await
        .context("select liked food ids")?;
    Ok(ids.into_iter().map(|(id,)| id).collect())
}

pub async fn list_liked_foods(db: &PgPool, student_id: &str) -> anyhow::Result<Vec<LikedFood>> {
    let rows = sqlx::query_as::<_, LikedFood>(
        r#"
        SELECT student_id, food_id, created_at
          FROM liked_foods
         WHERE student_id = $1
         ORDER BY created_at ASC
        "#,
    )
    .bind(student_id)
    .fetch_all(db)
    .await
    .context("list liked foods")?;
    Ok(rows)
}

/// Returns `true` if a new row was written.
pub async fn add_liked_food(db: &PgPool, student_id: &str, food_id: i64) -> anyhow::Result<bool> {
    let res = sqlx::query(
        r#"
        INSERT INTO liked_foods (student_id, food_id)
        VALUES ($1, $2)
        ON CONFLICT (student_id, food_id) DO NOTHING
        "#,
    )
    .bind(student_id)
    .bind(food_id)
    .execute(db)
    .await
    .context("insert liked food")?;
    Ok(res.rows_affected() > 0)
}

pub async fn remove_liked_food(db: &PgPool, student_id: &str, food_id: i64) -> anyhow::Result<()> {
    sqlx::query("DELETE FROM liked_foods WHERE student_id = $1 AND food_id = $2")
        .bind(student_id)
        .bind(food_id)
        .execute(db)
        .await
        .context("delete liked food")?;
    Ok(())
}
