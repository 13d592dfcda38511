//! In-memory mock implementations for the repository traits.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::{
        category::{Category, CategoryPatch, NewCategory},
        menu_item::{MenuItem, NewMenuItem},
    },
    use_cases::{category::CategoryRepo, menu_item::MenuItemRepo},
};

/// Next id after the highest one in use, like a serial column that was
/// never reset.
fn next_id<T>(rows: &BTreeMap<i32, T>) -> i32 {
    rows.keys().next_back().map_or(1, |id| id + 1)
}

// ============================================================================
// Menu Items
// ============================================================================

/// In-memory implementation of MenuItemRepo for testing.
#[derive(Default)]
pub struct InMemoryMenuItemRepo {
    pub items: Mutex<BTreeMap<i32, MenuItem>>,
}

impl InMemoryMenuItemRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with initial menu items for testing.
    pub fn with_items(items: Vec<MenuItem>) -> Self {
        Self {
            items: Mutex::new(items.into_iter().map(|i| (i.id, i)).collect()),
        }
    }

    /// Get all menu items in id order (for test assertions).
    pub fn get_all(&self) -> Vec<MenuItem> {
        self.items.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl MenuItemRepo for InMemoryMenuItemRepo {
    async fn list_all(&self) -> AppResult<Vec<MenuItem>> {
        Ok(self.get_all())
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<MenuItem>> {
        Ok(self.items.lock().unwrap().get(&id).cloned())
    }

    async fn create(&self, item: NewMenuItem) -> AppResult<MenuItem> {
        let mut items = self.items.lock().unwrap();

        let id = item.id.unwrap_or_else(|| next_id(&items));
        if items.contains_key(&id) {
            return Err(AppError::Database("duplicate key value".into()));
        }

        let item = MenuItem {
            id,
            name: item.name,
            category_id: item.category_id,
            description: item.description,
            ingredients: item.ingredients,
            active: item.active,
        };
        items.insert(id, item.clone());
        Ok(item)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        Ok(self.items.lock().unwrap().remove(&id).is_some())
    }
}

/// Every call fails the way a lost database connection would.
pub struct FailingMenuItemRepo;

#[async_trait]
impl MenuItemRepo for FailingMenuItemRepo {
    async fn list_all(&self) -> AppResult<Vec<MenuItem>> {
        Err(AppError::Database("connection refused".into()))
    }

    async fn get_by_id(&self, _id: i32) -> AppResult<Option<MenuItem>> {
        Err(AppError::Database("connection refused".into()))
    }

    async fn create(&self, _item: NewMenuItem) -> AppResult<MenuItem> {
        Err(AppError::Database("connection refused".into()))
    }

    async fn delete(&self, _id: i32) -> AppResult<bool> {
        Err(AppError::Database("connection refused".into()))
    }
}

// ============================================================================
// Categories
// ============================================================================

/// In-memory implementation of CategoryRepo for testing.
#[derive(Default)]
pub struct InMemoryCategoryRepo {
    pub categories: Mutex<BTreeMap<i32, Category>>,
}

impl InMemoryCategoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with initial categories for testing.
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            categories: Mutex::new(categories.into_iter().map(|c| (c.id, c)).collect()),
        }
    }

    /// Get all categories in id order (for test assertions).
    pub fn get_all(&self) -> Vec<Category> {
        self.categories.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl CategoryRepo for InMemoryCategoryRepo {
    async fn list_all(&self) -> AppResult<Vec<Category>> {
        Ok(self.get_all())
    }

    async fn create(&self, category: NewCategory) -> AppResult<Category> {
        let mut categories = self.categories.lock().unwrap();

        let category = Category {
            id: next_id(&categories),
            name: category.name,
            description: category.description,
        };
        categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn update(&self, id: i32, patch: CategoryPatch) -> AppResult<Option<Category>> {
        let mut categories = self.categories.lock().unwrap();

        Ok(categories.get_mut(&id).map(|category| {
            apply_patch(patch, category);
            category.clone()
        }))
    }
}

/// Mirrors the column-by-column update the Postgres repo performs.
fn apply_patch(patch: CategoryPatch, category: &mut Category) {
    if let Some(name) = patch.name {
        category.name = name;
    }
    if let Some(description) = patch.description {
        category.description = description;
    }
}
