use std::{
    cmp::Reverse,
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use async_trait::async_trait;
use time::OffsetDateTime;

use super::DiningStore;
use crate::{
    favorites::repo_types::LikedFood,
    foods::repo_types::{FoodInfo, NewFoodInfo},
    menu::repo_types::{MenuEntry, MenuItem, NewMenuItem},
    students::repo_types::{PreferencesPatch, StudentPreferences},
};

/// Fetches that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fetch {
    Menu,
    Preferences,
    Likes,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    foods: Vec<FoodInfo>,
    menu: Vec<MenuItem>,
    students: HashMap<String, StudentPreferences>,
    likes: Vec<LikedFood>,
    failing: HashSet<Fetch>,
}

impl Inner {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn check(&self, fetch: Fetch) -> anyhow::Result<()> {
        if self.failing.contains(&fetch) {
            anyhow::bail!("{fetch:?} fetch failed");
        }
        Ok(())
    }
}

/// In-memory [`DiningStore`] for tests.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_food(self, food: FoodInfo) -> Self {
        {
            let mut g = self.inner.lock().unwrap();
            g.next_id = g.next_id.max(food.id);
            g.foods.push(food);
        }
        self
    }

    pub fn with_menu_item(self, item: MenuItem) -> Self {
        {
            let mut g = self.inner.lock().unwrap();
            g.next_id = g.next_id.max(item.id);
            g.menu.push(item);
        }
        self
    }

    pub fn with_student(self, id: &str, prefs: StudentPreferences) -> Self {
        self.inner.lock().unwrap().students.insert(id.to_string(), prefs);
        self
    }

    pub fn with_like(self, student_id: &str, food_id: i64) -> Self {
        self.inner.lock().unwrap().likes.push(LikedFood {
            student_id: student_id.to_string(),
            food_id,
            created_at: OffsetDateTime::now_utc(),
        });
        self
    }

    pub fn failing(self, fetch: Fetch) -> Self {
        self.inner.lock().unwrap().failing.insert(fetch);
        self
    }
}

#[async_trait]
impl DiningStore for MemoryStore {
    async fn list_food_info(&self) -> anyhow::Result<Vec<FoodInfo>> {
        let mut foods = self.inner.lock().unwrap().foods.clone();
        foods.sort_by(|a, b| a.item_name.cmp(&b.item_name));
        Ok(foods)
    }

    async fn insert_food_info(&self, food: NewFoodInfo) -> anyhow::Result<FoodInfo> {
        let mut g = self.inner.lock().unwrap();
        let row = food.into_food_info(g.next_id());
        g.foods.push(row.clone());
        Ok(row)
    }

    async fn update_food_info(&self, id: i64, food: NewFoodInfo) -> anyhow::Result<Option<FoodInfo>> {
        let mut g = self.inner.lock().unwrap();
        let Some(slot) = g.foods.iter_mut().find(|f| f.id == id) else {
            return Ok(None);
        };
        let photo = food.item_photo_link.clone().or_else(|| slot.item_photo_link.clone());
        let mut row = food.into_food_info(id);
        row.item_photo_link = photo;
        *slot = row.clone();
        Ok(Some(row))
    }

    async fn delete_food_info(&self, id: i64) -> anyhow::Result<Option<FoodInfo>> {
        let mut g = self.inner.lock().unwrap();
        let pos = g.foods.iter().position(|f| f.id == id);
        Ok(pos.map(|i| g.foods.remove(i)))
    }

    async fn list_menu_entries(&self) -> anyhow::Result<Vec<MenuEntry>> {
        let g = self.inner.lock().unwrap();
        g.check(Fetch::Menu)?;
        let mut items = g.menu.clone();
        items.sort_by_key(|m| (m.date_available.is_none(), Reverse(m.date_available), m.id));
        Ok(items
            .into_iter()
            .map(|m| MenuEntry {
                food_info: g.foods.iter().find(|f| f.id == m.food_info_id).cloned(),
                id: m.id,
                dining_hall: m.dining_hall,
                counter: m.counter,
                day: m.day,
                date_available: m.date_available,
            })
            .collect())
    }

    async fn insert_menu_item(&self, item: NewMenuItem) -> anyhow::Result<MenuItem> {
        let mut g = self.inner.lock().unwrap();
        let row = item.into_menu_item(g.next_id());
        g.menu.push(row.clone());
        Ok(row)
    }

    async fn update_menu_item(&self, id: i64, item: NewMenuItem) -> anyhow::Result<Option<MenuItem>> {
        let mut g = self.inner.lock().unwrap();
        let Some(slot) = g.menu.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };
        *slot = item.into_menu_item(id);
        Ok(Some(slot.clone()))
    }

    async fn delete_menu_item(&self, id: i64) -> anyhow::Result<bool> {
        let mut g = self.inner.lock().unwrap();
        let before = g.menu.len();
        g.menu.retain(|m| m.id != id);
        Ok(g.menu.len() != before)
    }

    async fn init_student(&self, student_id: &str, _email: Option<&str>) -> anyhow::Result<bool> {
        let mut g = self.inner.lock().unwrap();
        if g.students.contains_key(student_id) {
            return Ok(false);
        }
        g.students.insert(student_id.to_string(), StudentPreferences::default());
        Ok(true)
    }

    async fn get_student_preferences(&self, student_id: &str) -> anyhow::Result<Option<StudentPreferences>> {
        let g = self.inner.lock().unwrap();
        g.check(Fetch::Preferences)?;
        Ok(g.students.get(student_id).cloned())
    }

    async fn update_student_preferences(
        &self,
        student_id: &str,
        patch: &PreferencesPatch,
    ) -> anyhow::Result<Option<StudentPreferences>> {
        let mut g = self.inner.lock().unwrap();
        Ok(g.students.get_mut(student_id).map(|prefs| {
            patch.apply(prefs);
            prefs.clone()
        }))
    }

    async fn liked_food_ids(&self, student_id: &str) -> anyhow::Result<HashSet<i64>> {
        let g = self.inner.lock().unwrap();
        g.check(Fetch::Likes)?;
        Ok(g.likes
            .iter()
            .filter(|l| l.student_id == student_id)
            .map(|l| l.food_id)
            .collect())
    }

    async fn list_liked_foods(&self, student_id: &str) -> anyhow::Result<Vec<LikedFood>> {
        let g = self.inner.lock().unwrap();
        g.check(Fetch::Likes)?;
        Ok(g.likes.iter().filter(|l| l.student_id == student_id).cloned().collect())
    }

    async fn add_liked_food(&self, student_id: &str, food_id: i64) -> anyhow::Result<bool> {
        let mut g = self.inner.lock().unwrap();
        if g.likes.iter().any(|l| l.student_id == student_id && l.food_id == food_id) {
            return Ok(false);
        }
        g.likes.push(LikedFood {
            student_id: student_id.to_string(),
            food_id,
            created_at: OffsetDateTime::now_utc(),
        });
        Ok(true)
    }

    async fn remove_liked_food(&self, student_id: &str, food_id: i64) -> anyhow::Result<()> {
        let mut g = self.inner.lock().unwrap();
        g.likes.retain(|l| !(l.student_id == student_id && l.food_id == food_id));
        Ok(())
    }
}
