use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::app_error::{AppError, AppResult};
use crate::entities::category::{Category, CategoryPatch, NewCategory};
use crate::pagination::Page;

#[async_trait]
pub trait CategoryRepo: Send + Sync {
    /// All categories in ascending id order.
    async fn list_all(&self) -> AppResult<Vec<Category>>;
    async fn create(&self, category: NewCategory) -> AppResult<Category>;
    /// Returns `None` when no row had that id.
    async fn update(&self, id: i32, patch: CategoryPatch) -> AppResult<Option<Category>>;
}

#[derive(Clone)]
pub struct CategoryUseCases {
    repo: Arc<dyn CategoryRepo>,
}

impl CategoryUseCases {
    pub fn new(repo: Arc<dyn CategoryRepo>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn list_page(&self, page: i64) -> AppResult<Page<Category>> {
        let categories = self.repo.list_all().await?;
        Page::from_ordered(page, &categories)
    }

    #[instrument(skip(self))]
    pub async fn create(&self, category: NewCategory) -> AppResult<Category> {
        self.repo.create(category).await
    }

    #[instrument(skip(self))]
    pub async fn update(&self, id: i32, patch: CategoryPatch) -> AppResult<Category> {
        self.repo.update(id, patch).await?.ok_or(AppError::NotFound)
    }
}
