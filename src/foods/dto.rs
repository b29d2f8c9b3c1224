use std::collections::HashMap;

use bytes::Bytes;
use serde::Deserialize;

/// Text fields and optional photo of a multipart food form.
#[derive(Debug, Default)]
pub struct FoodForm {
    pub fields: HashMap<String, String>,
    pub photo: Option<PhotoUpload>,
}

impl FoodForm {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

#[derive(Debug)]
pub struct PhotoUpload {
    pub body: Bytes,
    pub content_type: String,
    pub file_name: Option<String>,
}

/// JSON body of `PUT /meals/food-info/:id`.
#[derive(Debug, Deserialize)]
pub struct FoodInfoUpdate {
    pub item_name: Option<String>,
    pub item_photo_link: Option<String>,
    #[serde(default)]
    pub veg: bool,
    #[serde(default)]
    pub vegan: bool,
    #[serde(default)]
    pub gluten_free: bool,
    #[serde(default)]
    pub allergens: Vec<String>,
    pub energy: f64,
    pub fats: f64,
    pub protein: f64,
    pub salt: f64,
    pub sugar: f64,
}
