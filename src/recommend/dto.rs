use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub clerk_user_id: Option<String>,
}
