use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::app_error::{AppError, AppResult};
use crate::entities::menu_item::{MenuItem, NewMenuItem};
use crate::pagination::Page;

#[async_trait]
pub trait MenuItemRepo: Send + Sync {
    /// All menu items in ascending id order.
    async fn list_all(&self) -> AppResult<Vec<MenuItem>>;
    async fn get_by_id(&self, id: i32) -> AppResult<Option<MenuItem>>;
    async fn create(&self, item: NewMenuItem) -> AppResult<MenuItem>;
    /// Returns `false` when no row had that id.
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

#[derive(Clone)]
pub struct MenuItemUseCases {
    repo: Arc<dyn MenuItemRepo>,
}

impl MenuItemUseCases {
    pub fn new(repo: Arc<dyn MenuItemRepo>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn list_page(&self, page: i64) -> AppResult<Page<MenuItem>> {
        let items = self.repo.list_all().await?;
        Page::from_ordered(page, &items)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> AppResult<MenuItem> {
        self.repo.get_by_id(id).await?.ok_or(AppError::NotFound)
    }

    #[instrument(skip(self))]
    pub async fn create(&self, item: NewMenuItem) -> AppResult<MenuItem> {
        self.repo.create(item).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> AppResult<i32> {
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound);
        }
        Ok(id)
    }
}
