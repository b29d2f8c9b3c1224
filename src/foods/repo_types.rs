use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::health::{compute_health_score, NutritionFacts};

/// A distinct dish with its dietary and nutrition metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct FoodInfo {
    pub id: i64,
    pub item_name: String,
    pub item_photo_link: Option<String>,
    pub health_score: i32,
    pub veg: bool,
    pub vegan: bool,
    pub gluten_free: bool,
    pub allergens: Vec<String>,
    pub energy: f64,
    pub fats: f64,
    pub protein: f64,
    pub salt: f64,
    pub sugar: f64,
}

/// Column values for inserting or replacing a food item.
///
/// Only constructible through [`NewFoodInfo::new`], so the stored health score
/// always matches the nutrition facts it is written with.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFoodInfo {
    pub item_name: String,
    pub item_photo_link: Option<String>,
    pub veg: bool,
    pub vegan: bool,
    pub gluten_free: bool,
    pub allergens: Vec<String>,
    pub facts: NutritionFacts,
    health_score: i32,
}

impl NewFoodInfo {
    pub fn new(
        item_name: String,
        item_photo_link: Option<String>,
        veg: bool,
        vegan: bool,
        gluten_free: bool,
        allergens: Vec<String>,
        facts: NutritionFacts,
    ) -> Self {
        Self {
            item_name,
            item_photo_link,
            veg,
            vegan,
            gluten_free,
            allergens,
            health_score: compute_health_score(&facts).into(),
            facts,
        }
    }

    pub fn health_score(&self) -> i32 {
        self.health_score
    }

    pub fn into_food_info(self, id: i64) -> FoodInfo {
        FoodInfo {
            id,
            item_name: self.item_name,
            item_photo_link: self.item_photo_link,
            health_score: self.health_score,
            veg: self.veg,
            vegan: self.vegan,
            gluten_free: self.gluten_free,
            allergens: self.allergens,
            energy: self.facts.energy(),
            fats: self.facts.fats(),
            protein: self.facts.protein(),
            salt: self.facts.salt(),
            sugar: self.facts.sugar(),
        }
    }
}
