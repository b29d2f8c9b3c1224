use serde::Deserialize;
use time::Date;

/// Body of `POST` and `PUT /meals/week-menu`.
#[derive(Debug, Deserialize)]
pub struct MenuItemRequest {
    pub dining_hall: Option<String>,
    pub counter: Option<String>,
    pub food_info_id: Option<i64>,
    pub date_available: Option<Date>,
    pub day: Option<String>,
}
