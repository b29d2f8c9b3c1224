use time::{Date, OffsetDateTime};

use super::{dto::MenuItemRequest, repo_types::NewMenuItem};
use crate::error::AppError;

fn non_blank(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Validates a menu item body. Without a day or a date the item is dated `today`.
pub fn new_menu_item(req: MenuItemRequest, today: Date) -> Result<NewMenuItem, AppError> {
    let (Some(dining_hall), Some(counter), Some(food_info_id)) = (
        non_blank(req.dining_hall),
        non_blank(req.counter),
        req.food_info_id,
    ) else {
        return Err(AppError::validation("Missing required fields"));
    };

    let day = non_blank(req.day);
    let date_available = match (req.date_available, &day) {
        (None, None) => Some(today),
        (date, _) => date,
    };

    Ok(NewMenuItem {
        dining_hall,
        counter,
        food_info_id,
        date_available,
        day,
    })
}

pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}
