use anyhow::Context;
use tracing::{info, warn};
use uuid::Uuid;

use super::{
    dto::{FoodForm, FoodInfoUpdate, PhotoUpload},
    repo_types::{FoodInfo, NewFoodInfo},
};
use crate::{error::AppError, health::NutritionFacts, state::AppState};

fn form_bool(v: Option<&str>) -> bool {
    matches!(v.map(|s| s.trim().to_ascii_lowercase()).as_deref(), Some("true" | "1" | "on"))
}

/// Accepts a JSON array (`["Milk","Eggs"]`) or a comma separated list.
fn parse_allergens(raw: Option<&str>) -> Result<Vec<String>, AppError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(Vec::new());
    };
    let list: Vec<String> = if raw.starts_with('[') {
        serde_json::from_str(raw).map_err(|_| AppError::validation("allergens must be a JSON array of strings"))?
    } else {
        raw.split(',').map(str::to_string).collect()
    };
    Ok(clean_allergens(list))
}

fn clean_allergens(list: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(list.len());
    for a in list {
        let a = a.trim();
        if !a.is_empty() && !out.iter().any(|o| o.eq_ignore_ascii_case(a)) {
            out.push(a.to_string());
        }
    }
    out
}

fn require_name(name: Option<&str>) -> Result<String, AppError> {
    name.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::validation("Item name is required"))
}

/// Validates a multipart form into a food item (photo not yet uploaded).
pub fn food_from_form(form: &FoodForm) -> Result<NewFoodInfo, AppError> {
    let item_name = require_name(form.field("item_name"))?;
    let allergens = parse_allergens(form.field("allergens"))?;
    let facts = NutritionFacts::parse_fields(|name| form.field(name))?;
    Ok(NewFoodInfo::new(
        item_name,
        None,
        form_bool(form.field("veg")),
        form_bool(form.field("vegan")),
        form_bool(form.field("gluten_free")),
        allergens,
        facts,
    ))
}

pub fn food_from_update(body: FoodInfoUpdate) -> Result<NewFoodInfo, AppError> {
    let item_name = require_name(body.item_name.as_deref())?;
    let facts = NutritionFacts::new(body.energy, body.fats, body.protein, body.salt, body.sugar)?;
    Ok(NewFoodInfo::new(
        item_name,
        body.item_photo_link.filter(|s| !s.trim().is_empty()),
        body.veg,
        body.vegan,
        body.gluten_free,
        clean_allergens(body.allergens),
        facts,
    ))
}

fn ext_from_mime(ct: &str) -> Option<&'static str> {
    match ct {
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        "image/gif" => Some("gif"),
        "image/heic" => Some("heic"),
        _ => None,
    }
}

fn photo_ext(photo: &PhotoUpload) -> String {
    photo
        .file_name
        .as_deref()
        .and_then(|n| n.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty() && ext.len() <= 5 && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .or_else(|| ext_from_mime(&photo.content_type).map(str::to_string))
        .unwrap_or_else(|| "bin".into())
}

/// Uploads the photo under `public/<uuid>.<ext>`; returns the object key.
async fn upload_photo(st: &AppState, photo: PhotoUpload) -> anyhow::Result<String> {
    let key = format!("public/{}.{}", Uuid::new_v4(), photo_ext(&photo));
    st.storage
        .put_object(&key, photo.body, &photo.content_type)
        .await
        .with_context(|| format!("put_object {}", key))?;
    Ok(key)
}

async fn remove_photo(st: &AppState, link: &str) {
    let Some(key) = st.storage.key_for_url(link) else {
        return;
    };
    if let Err(e) = st.storage.delete_object(&key).await {
        warn!(error = %e, %key, "failed to delete food photo");
    }
}

pub async fn create_food(st: &AppState, mut form: FoodForm) -> Result<FoodInfo, AppError> {
    let mut food = food_from_form(&form)?;

    if let Some(photo) = form.photo.take() {
        let key = upload_photo(st, photo)
            .await
            .map_err(AppError::dependency("Failed to upload photo"))?;
        food.item_photo_link = Some(st.storage.public_url(&key));
    }

    let photo_link = food.item_photo_link.clone();
    match st.store.insert_food_info(food).await {
        Ok(row) => {
            info!(food_id = row.id, health_score = row.health_score, "food item created");
            Ok(row)
        }
        Err(e) => {
            if let Some(link) = photo_link {
                remove_photo(st, &link).await;
            }
            Err(AppError::dependency("Failed to create food item")(e))
        }
    }
}

pub async fn update_food(st: &AppState, id: i64, body: FoodInfoUpdate) -> Result<FoodInfo, AppError> {
    let food = food_from_update(body)?;
    let row = st
        .store
        .update_food_info(id, food)
        .await
        .map_err(AppError::dependency("Failed to update food item"))?
        .ok_or_else(|| AppError::not_found("Food item not found"))?;
    info!(food_id = row.id, health_score = row.health_score, "food item updated");
    Ok(row)
}

pub async fn delete_food(st: &AppState, id: i64) -> Result<(), AppError> {
    let row = st
        .store
        .delete_food_info(id)
        .await
        .map_err(AppError::dependency("Failed to delete food item"))?
        .ok_or_else(|| AppError::not_found("Food item not found"))?;
    if let Some(link) = &row.item_photo_link {
        remove_photo(st, link).await;
    }
    info!(food_id = id, "food item deleted");
    Ok(())
}
