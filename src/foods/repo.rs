use anyhow::Context;
use sqlx::PgPool;

use super::repo_types::{FoodInfo, NewFoodInfo};

const FOOD_COLUMNS: &str = "id, item_name, item_photo_link, health_score, veg, vegan, gluten_free, \
                            allergens, energy, fats, protein, salt, sugar";

pub async fn list_food_info(db: &PgPool) -> anyhow::Result<Vec<FoodInfo>> {
    let rows = sqlx::query_as::<_, FoodInfo>(&format!(
        "SELECT {FOOD_COLUMNS} FROM food_info ORDER BY item_name ASC"
    ))
    .fetch_all(db)
    .await
    .context("list food_info")?;
    Ok(rows)
}

pub async fn insert_food_info(db: &PgPool, food: &NewFoodInfo) -> anyhow::Result<FoodInfo> {
    let row = sqlx::query_as::<_, FoodInfo>(&format!(
        r#"
        INSERT INTO food_info (item_name, item_photo_link, health_score, veg, vegan, gluten_free,
                               allergens, energy, fats, protein, salt, sugar)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        RETURNING {FOOD_COLUMNS}
        "#
    ))
    .bind(&food.item_name)
    .bind(&food.item_photo_link)
    .bind(food.health_score())
    .bind(food.veg)
    .bind(food.vegan)
    .bind(food.gluten_free)
    .bind(&food.allergens)
    .bind(food.facts.energy())
    .bind(food.facts.fats())
    .bind(food.facts.protein())
    .bind(food.facts.salt())
    .bind(food.facts.sugar())
    .fetch_one(db)
    .await
    .context("insert food_info")?;
    Ok(row)
}

/// Replaces every column of a food item. A `None` photo keeps the stored link.
pub async fn update_food_info(
    db: &PgPool,
    id: i64,
    food: &NewFoodInfo,
) -> anyhow::Result<Option<FoodInfo>> {
    let row = sqlx::query_as::<_, FoodInfo>(&format!(
        r#"
        UPDATE food_info
           SET item_name = $2,
               item_photo_link = COALESCE($3, item_photo_link),
               health_score = $4,
               veg = $5,
               vegan = $6,
               gluten_free = $7,
               allergens = $8,
               energy = $9,
               fats = $10,
               protein = $11,
               salt = $12,
               sugar = $13
         WHERE id = $1
        RETURNING {FOOD_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(&food.item_name)
    .bind(&food.item_photo_link)
    .bind(food.health_score())
    .bind(food.veg)
    .bind(food.vegan)
    .bind(food.gluten_free)
    .bind(&food.allergens)
    .bind(food.facts.energy())
    .bind(food.facts.fats())
    .bind(food.facts.protein())
    .bind(food.facts.salt())
    .bind(food.facts.sugar())
    .fetch_optional(db)
    .await
    .context("update food_info")?;
    Ok(row)
}

/// Deletes a food item and hands back the removed row.
pub async fn delete_food_info(db: &PgPool, id: i64) -> anyhow::Result<Option<FoodInfo>> {
    let row = sqlx::query_as::<_, FoodInfo>(&format!(
        "DELETE FROM food_info WHERE id = $1 RETURNING {FOOD_COLUMNS}"
    ))
    .bind(id)
    .fetch_optional(db)
    .await
    .context("delete food_info")?;
    Ok(row)
}
