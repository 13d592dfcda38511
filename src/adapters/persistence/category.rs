use async_trait::async_trait;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    entities::category::{Category, CategoryPatch, NewCategory},
    use_cases::category::CategoryRepo,
};

#[derive(sqlx::FromRow, Debug)]
struct CategoryDb {
    id: i32,
    name: String,
    description: Option<String>,
}

impl From<CategoryDb> for Category {
    fn from(row: CategoryDb) -> Self {
        Category {
            id: row.id,
            name: row.name,
            description: row.description,
        }
    }
}

#[async_trait]
impl CategoryRepo for PostgresPersistence {
    async fn list_all(&self) -> AppResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryDb>(
            "SELECT id, name, description FROM categories ORDER BY id ASC",
        )
        .fetch_all(self.pool())
        .await
        .map_err(AppError::from)?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn create(&self, category: NewCategory) -> AppResult<Category> {
        let row = sqlx::query_as::<_, CategoryDb>(
            r#"
            INSERT INTO categories (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            "#,
        )
        .bind(category.name)
        .bind(category.description)
        .fetch_one(self.pool())
        .await
        .map_err(AppError::from)?;

        Ok(row.into())
    }

    async fn update(&self, id: i32, patch: CategoryPatch) -> AppResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryDb>(
            r#"
            UPDATE categories
            SET name = COALESCE($2, name),
                description = CASE WHEN $3 THEN $4 ELSE description END
            WHERE id = $1
            RETURNING id, name, description
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.description.is_some())
        .bind(patch.description.flatten())
        .fetch_optional(self.pool())
        .await
        .map_err(AppError::from)?;

        Ok(row.map(Category::from))
    }
}
