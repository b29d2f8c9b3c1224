//! Persistence boundary. Handlers and services only see [`DiningStore`];
//! the Postgres implementation lives in [`postgres`].

use std::collections::HashSet;

use async_trait::async_trait;

use crate::{
    favorites::repo_types::LikedFood,
    foods::repo_types::{FoodInfo, NewFoodInfo},
    menu::repo_types::{MenuEntry, MenuItem, NewMenuItem},
    students::repo_types::{PreferencesPatch, StudentPreferences},
};

#[cfg(test)]
pub mod memory;
pub mod postgres;

#[async_trait]
pub trait DiningStore: Send + Sync {
    // ---- food_info ----
    async fn list_food_info(&self) -> anyhow::Result<Vec<FoodInfo>>;
    async fn insert_food_info(&self, food: NewFoodInfo) -> anyhow::Result<FoodInfo>;
    async fn update_food_info(&self, id: i64, food: NewFoodInfo) -> anyhow::Result<Option<FoodInfo>>;
    /// Returns the deleted row, `None` if no row matched.
    async fn delete_food_info(&self, id: i64) -> anyhow::Result<Option<FoodInfo>>;

    // ---- week_menu ----
    /// Every menu entry with its food item attached, latest date first.
    async fn list_menu_entries(&self) -> anyhow::Result<Vec<MenuEntry>>;
    async fn insert_menu_item(&self, item: NewMenuItem) -> anyhow::Result<MenuItem>;
    async fn update_menu_item(&self, id: i64, item: NewMenuItem) -> anyhow::Result<Option<MenuItem>>;
    /// Returns `false` if no row matched.
    async fn delete_menu_item(&self, id: i64) -> anyhow::Result<bool>;

    // ---- students ----
    /// Returns `true` if the student was created, `false` if it already existed.
    async fn init_student(&self, student_id: &str, email: Option<&str>) -> anyhow::Result<bool>;
    async fn get_student_preferences(&self, student_id: &str) -> anyhow::Result<Option<StudentPreferences>>;
    async fn update_student_preferences(
        &self,
        student_id: &str,
        patch: &PreferencesPatch,
    ) -> anyhow::Result<Option<StudentPreferences>>;

    // ---- liked_foods ----
    async fn liked_food_ids(&self, student_id: &str) -> anyhow::Result<HashSet<i64>>;
    async fn list_liked_foods(&self, student_id: &str) -> anyhow::Result<Vec<LikedFood>>;
    /// Returns `true` if the like was new.
    async fn add_liked_food(&self, student_id: &str, food_id: i64) -> anyhow::Result<bool>;
    async fn remove_liked_food(&self, student_id: &str, food_id: i64) -> anyhow::Result<()>;
}
