use async_trait::async_trait;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    entities::menu_item::{MenuItem, NewMenuItem},
    use_cases::menu_item::MenuItemRepo,
};

// Menu item row as stored in the db.
#[derive(sqlx::FromRow, Debug)]
struct MenuItemDb {
    id: i32,
    name: String,
    category_id: Option<i32>,
    description: String,
    ingredients: String,
    active: Option<bool>,
}

impl From<MenuItemDb> for MenuItem {
    fn from(row: MenuItemDb) -> Self {
        MenuItem {
            id: row.id,
            name: row.name,
            category_id: row.category_id,
            description: row.description,
            ingredients: row.ingredients,
            active: row.active,
        }
    }
}

#[async_trait]
impl MenuItemRepo for PostgresPersistence {
    async fn list_all(&self) -> AppResult<Vec<MenuItem>> {
        let rows = sqlx::query_as::<_, MenuItemDb>(
            r#"
            SELECT id, name, category_id, description, ingredients, active
            FROM menu_items
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.pool())
        .await
        .map_err(AppError::from)?;

        Ok(rows.into_iter().map(MenuItem::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<MenuItem>> {
        let row = sqlx::query_as::<_, MenuItemDb>(
            r#"
            SELECT id, name, category_id, description, ingredients, active
            FROM menu_items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(AppError::from)?;

        Ok(row.map(MenuItem::from))
    }

    async fn create(&self, item: NewMenuItem) -> AppResult<MenuItem> {
        // An explicit id bypasses the serial sequence.
        let query = match item.id {
            Some(id) => sqlx::query_as::<_, MenuItemDb>(
                r#"
                INSERT INTO menu_items (id, name, category_id, description, ingredients, active)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id, name, category_id, description, ingredients, active
                "#,
            )
            .bind(id),
            None => sqlx::query_as::<_, MenuItemDb>(
                r#"
                INSERT INTO menu_items (name, category_id, description, ingredients, active)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, name, category_id, description, ingredients, active
                "#,
            ),
        };

        let row = query
            .bind(item.name)
            .bind(item.category_id)
            .bind(item.description)
            .bind(item.ingredients)
            .bind(item.active)
            .fetch_one(self.pool())
            .await
            .map_err(AppError::from)?;

        Ok(row.into())
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected() > 0)
    }
}
