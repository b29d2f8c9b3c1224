use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::Date;

use crate::foods::repo_types::FoodInfo;

/// One offering of a dish at a dining hall counter on a given day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuEntry {
    pub id: i64,
    pub dining_hall: String,
    pub counter: String,
    pub day: Option<String>,
    pub date_available: Option<Date>,
    /// `None` when the referenced food item no longer exists.
    pub food_info: Option<FoodInfo>,
}

/// `week_menu LEFT JOIN food_info`, food columns prefixed with `f_`.
#[derive(Debug, FromRow)]
pub struct MenuEntryRow {
    pub id: i64,
    pub dining_hall: String,
    pub counter: String,
    pub day: Option<String>,
    pub date_available: Option<Date>,
    pub f_id: Option<i64>,
    pub f_item_name: Option<String>,
    pub f_item_photo_link: Option<String>,
    pub f_health_score: Option<i32>,
    pub f_veg: Option<bool>,
    pub f_vegan: Option<bool>,
    pub f_gluten_free: Option<bool>,
    pub f_allergens: Option<Vec<String>>,
    pub f_energy: Option<f64>,
    pub f_fats: Option<f64>,
    pub f_protein: Option<f64>,
    pub f_salt: Option<f64>,
    pub f_sugar: Option<f64>,
}

impl From<MenuEntryRow> for MenuEntry {
    fn from(r: MenuEntryRow) -> Self {
        let food_info = match (r.f_id, r.f_item_name) {
            (Some(id), Some(item_name)) => Some(FoodInfo {
                id,
                item_name,
                item_photo_link: r.f_item_photo_link,
                health_score: r.f_health_score.unwrap_or(0),
                veg: r.f_veg.unwrap_or(false),
                vegan: r.f_vegan.unwrap_or(false),
                gluten_free: r.f_gluten_free.unwrap_or(false),
                allergens: r.f_allergens.unwrap_or_default(),
                energy: r.f_energy.unwrap_or(0.0),
                fats: r.f_fats.unwrap_or(0.0),
                protein: r.f_protein.unwrap_or(0.0),
                salt: r.f_salt.unwrap_or(0.0),
                sugar: r.f_sugar.unwrap_or(0.0),
            }),
            _ => None,
        };
        Self {
            id: r.id,
            dining_hall: r.dining_hall,
            counter: r.counter,
            day: r.day,
            date_available: r.date_available,
            food_info,
        }
    }
}

/// A bare `week_menu` row as written by admins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MenuItem {
    pub id: i64,
    pub dining_hall: String,
    pub counter: String,
    pub food_info_id: i64,
    pub date_available: Option<Date>,
    pub day: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMenuItem {
    pub dining_hall: String,
    pub counter: String,
    pub food_info_id: i64,
    pub date_available: Option<Date>,
    pub day: Option<String>,
}

impl NewMenuItem {
    pub fn into_menu_item(self, id: i64) -> MenuItem {
        MenuItem {
            id,
            dining_hall: self.dining_hall,
            counter: self.counter,
            food_info_id: self.food_info_id,
            date_available: self.date_available,
            day: self.day,
        }
    }
}
