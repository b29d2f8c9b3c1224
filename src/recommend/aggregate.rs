use std::collections::{HashMap, HashSet};

use serde::Serialize;
use time::{Date, Weekday};
use tracing::debug;

use crate::{foods::repo_types::FoodInfo, menu::repo_types::MenuEntry};

/// A dish merged across every menu entry that offers it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedDish {
    /// Menu entry the dish was first seen in.
    pub id: i64,
    pub dining_hall: String,
    pub counter: String,
    pub day: Option<String>,
    pub date_available: Option<Date>,
    pub food_info: FoodInfo,
    pub health_score: i32,
    #[serde(rename = "isFavorite")]
    pub is_favorite: bool,
    /// Monday..Sunday, unknown labels last.
    #[serde(rename = "daysAvailable")]
    pub days_available: Vec<String>,
}

impl AggregatedDish {
    pub fn food_id(&self) -> i64 {
        self.food_info.id
    }
}

const WEEK: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

/// Parses "Monday", "monday", "Mon", ... into a weekday.
pub fn parse_weekday(label: &str) -> Option<Weekday> {
    let label = label.trim().to_ascii_lowercase();
    if label.len() < 3 {
        return None;
    }
    WEEK.into_iter().find(|d| {
        let name = d.to_string().to_ascii_lowercase();
        name == label || (label.len() == 3 && name.starts_with(&label))
    })
}

/// Day label of an entry: its `day`, else the weekday of its date.
fn day_label(entry: &MenuEntry) -> Option<String> {
    match entry.day.as_deref().map(str::trim) {
        Some(day) if !day.is_empty() => Some(match parse_weekday(day) {
            Some(weekday) => weekday.to_string(),
            None => day.to_string(),
        }),
        _ => entry.date_available.map(|d| d.weekday().to_string()),
    }
}

fn sort_days(days: &mut [String]) {
    // stable: unknown labels keep encounter order
    days.sort_by_key(|d| parse_weekday(d).map_or(u8::MAX, |w| w.number_from_monday()));
}

/// Collapses menu entries into one [`AggregatedDish`] per food id, in
/// first-seen order. Entries without a food item are skipped.
pub fn aggregate(entries: Vec<MenuEntry>, liked: &HashSet<i64>) -> Vec<AggregatedDish> {
    let mut dishes: Vec<AggregatedDish> = Vec::new();
    let mut by_food: HashMap<i64, usize> = HashMap::new();

    for entry in entries {
        let label = day_label(&entry);
        let MenuEntry {
            id,
            dining_hall,
            counter,
            day,
            date_available,
            food_info,
        } = entry;

        let Some(food_info) = food_info else {
            debug!(menu_entry_id = id, "menu entry has no food info; skipping");
            continue;
        };

        let idx = *by_food.entry(food_info.id).or_insert_with(|| {
            dishes.push(AggregatedDish {
                id,
                dining_hall,
                counter,
                day,
                date_available,
                health_score: food_info.health_score,
                is_favorite: liked.contains(&food_info.id),
                food_info,
                days_available: Vec::new(),
            });
            dishes.len() - 1
        });

        if let Some(label) = label {
            let days = &mut dishes[idx].days_available;
            if !days.contains(&label) {
                days.push(label);
            }
        }
    }

    for dish in &mut dishes {
        sort_days(&mut dish.days_available);
    }
    dishes
}
