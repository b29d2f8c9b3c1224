use std::collections::HashSet;

use async_trait::async_trait;
use sqlx::PgPool;

use super::DiningStore;
use crate::{
    favorites::{self, repo_types::LikedFood},
    foods::{self, repo_types::{FoodInfo, NewFoodInfo}},
    menu::{self, repo_types::{MenuEntry, MenuItem, NewMenuItem}},
    students::{self, repo_types::{PreferencesPatch, StudentPreferences}},
};

/// [`DiningStore`] over the Postgres pool shared by the whole process.
#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DiningStore for PgStore {
    async fn list_food_info(&self) -> anyhow::Result<Vec<FoodInfo>> {
        foods::repo::list_food_info(&self.db).await
    }

    async fn insert_food_info(&self, food: NewFoodInfo) -> anyhow::Result<FoodInfo> {
        foods::repo::insert_food_info(&self.db, &food).await
    }

    async fn update_food_info(&self, id: i64, food: NewFoodInfo) -> anyhow::Result<Option<FoodInfo>> {
        foods::repo::update_food_info(&self.db, id, &food).await
    }

    async fn delete_food_info(&self, id: i64) -> anyhow::Result<Option<FoodInfo>> {
        foods::repo::delete_food_info(&self.db, id).await
    }

    async fn list_menu_entries(&self) -> anyhow::Result<Vec<MenuEntry>> {
        menu::repo::list_menu_entries(&self.db).await
    }

    async fn insert_menu_item(&self, item: NewMenuItem) -> anyhow::Result<MenuItem> {
        menu::repo::insert_menu_item(&self.db, &item).await
    }

    async fn update_menu_item(&self, id: i64, item: NewMenuItem) -> anyhow::Result<Option<MenuItem>> {
        menu::repo::update_menu_item(&self.db, id, &item).await
    }

    async fn delete_menu_item(&self, id: i64) -> anyhow::Result<bool> {
        menu::repo::delete_menu_item(&self.db, id).await
    }

    async fn init_student(&self, student_id: &str, email: Option<&str>) -> anyhow::Result<bool> {
        students::repo::init_student(&self.db, student_id, email).await
    }

    async fn get_student_preferences(&self, student_id: &str) -> anyhow::Result<Option<StudentPreferences>> {
        students::repo::get_preferences(&self.db, student_id).await
    }

    async fn update_student_preferences(
        &self,
        student_id: &str,
        patch: &PreferencesPatch,
    ) -> anyhow::Result<Option<StudentPreferences>> {
        students::repo::update_preferences(&self.db, student_id, patch).await
    }

    async fn liked_food_ids(&self, student_id: &str) -> anyhow::Result<HashSet<i64>> {
        favorites::repo::liked_food_ids(&self.db, student_id).await
    }

    async fn list_liked_foods(&self, student_id: &str) -> anyhow::Result<Vec<LikedFood>> {
        favorites::repo::list_liked_foods(&self.db, student_id).await
    }

    async fn add_liked_food(&self, student_id: &str, food_id: i64) -> anyhow::Result<bool> {
        favorites::repo::add_liked_food(&self.db, student_id, food_id).await
    }

    async fn remove_liked_food(&self, student_id: &str, food_id: i64) -> anyhow::Result<()> {
        favorites::repo::remove_liked_food(&self.db, student_id, food_id).await
    }
}
