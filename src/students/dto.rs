use serde::{Deserialize, Serialize};

use super::repo_types::{PreferencesPatch, StudentPreferences};

#[derive(Debug, Deserialize)]
pub struct InitStudentRequest {
    pub clerk_user_id: Option<String>,
    pub email: Option<String>,
}

/// `{ clerk_user_id, is_veg?, is_vegan?, is_gluten_free?, allergens? }`.
/// Any other key is ignored.
#[derive(Debug, Deserialize)]
pub struct UpdatePreferencesRequest {
    pub clerk_user_id: Option<String>,
    #[serde(flatten)]
    pub patch: PreferencesPatch,
}

#[derive(Debug, Deserialize)]
pub struct StudentQuery {
    pub clerk_user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PreferencesUpdated {
    pub message: &'static str,
    pub data: StudentPreferences,
}
