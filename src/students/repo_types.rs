use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Dietary restrictions of a student. Missing values mean "no restriction".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct StudentPreferences {
    pub is_veg: bool,
    pub is_vegan: bool,
    pub is_gluten_free: bool,
    pub allergens: Vec<String>,
}

/// Partial preferences update. Fields left `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PreferencesPatch {
    pub is_veg: Option<bool>,
    pub is_vegan: Option<bool>,
    pub is_gluten_free: Option<bool>,
    pub allergens: Option<Vec<String>>,
}

impl PreferencesPatch {
    pub fn is_empty(&self) -> bool {
        self.is_veg.is_none()
            && self.is_vegan.is_none()
            && self.is_gluten_free.is_none()
            && self.allergens.is_none()
    }

    pub fn apply(&self, prefs: &mut StudentPreferences) {
        if let Some(v) = self.is_veg {
            prefs.is_veg = v;
        }
        if let Some(v) = self.is_vegan {
            prefs.is_vegan = v;
        }
        if let Some(v) = self.is_gluten_free {
            prefs.is_gluten_free = v;
        }
        if let Some(a) = &self.allergens {
            prefs.allergens = a.clone();
        }
    }
}
