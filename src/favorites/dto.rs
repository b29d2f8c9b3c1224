use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FavoriteRequest {
    pub clerk_user_id: Option<String>,
    pub food_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct FavoritesQuery {
    pub clerk_user_id: Option<String>,
}
