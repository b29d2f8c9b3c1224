use anyhow::Context;
use sqlx::PgPool;

use super::repo_types::{MenuEntry, MenuEntryRow, MenuItem, NewMenuItem};

/// All menu rows joined with their food item. Rows whose food item is gone
/// come back with `food_info: None`.
pub async fn list_menu_entries(db: &PgPool) -> anyhow::Result<Vec<MenuEntry>> {
    let rows = sqlx::query_as::<_, MenuEntryRow>(
        r#"
        SELECT w.id, w.dining_hall, w.counter, w.day, w.date_available,
               f.id AS f_id, f.item_name AS f_item_name, f.item_photo_link AS f_item_photo_link,
               f.health_score AS f_health_score, f.veg AS f_veg, f.vegan AS f_vegan,
               f.gluten_free AS f_gluten_free, f.allergens AS f_allergens,
               f.energy AS f_energy, f.fats AS f_fats, f.protein AS f_protein,
               f.salt AS f_salt, f.sugar AS f_sugar
          FROM week_menu w
          LEFT JOIN food_info f ON f.id = w.food_info_id
         ORDER BY w.date_available DESC NULLS LAST, w.id ASC
        "#,
    )
    .fetch_all(db)
    .await
    .context("list week_menu")?;

    Ok(rows.into_iter().map(MenuEntry::from).collect())
}

pub async fn insert_menu_item(db: &PgPool, item: &NewMenuItem) -> anyhow::Result<MenuItem> {
    let row = sqlx::query_as::<_, MenuItem>(
        r#"
        INSERT INTO week_menu (dining_hall, counter, food_info_id, date_available, day)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, dining_hall, counter, food_info_id, date_available, day
        "#,
    )
    .bind(&item.dining_hall)
    .bind(&item.counter)
    .bind(item.food_info_id)
    .bind(item.date_available)
    .bind(&item.day)
    .fetch_one(db)
    .await
    .context("insert week_menu")?;
    Ok(row)
}

pub async fn update_menu_item(
    db: &PgPool,
    id: i64,
    item: &NewMenuItem,
) -> anyhow::Result<Option<MenuItem>> {
    let row = sqlx::query_as::<_, MenuItem>(
        r#"
        UPDATE week_menu
           SET dining_hall = $2, counter = $3, food_info_id = $4, date_available = $5, day = $6
         WHERE id = $1
        RETURNING id, dining_hall, counter, food_info_id, date_available, day
        "#,
    )
    .bind(id)
    .bind(&item.dining_hall)
    .bind(&item.counter)
    .bind(item.food_info_id)
    .bind(item.date_available)
    .bind(&item.day)
    .fetch_optional(db)
    .await
    .context("update week_menu")?;
    Ok(row)
}

pub async fn delete_menu_item(db: &PgPool, id: i64) -> anyhow::Result<bool> {
    let res = sqlx::query("DELETE FROM week_menu WHERE id = $1")
        .bind(id)
        .execute(db)
        .await
        .context("delete week_menu")?;
    Ok(res.rows_affected() > 0)
}
