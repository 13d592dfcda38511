use sqlx::PgPool;

use crate::app_error::AppError;

pub mod category;
pub mod menu_item;

/// Postgres-backed implementation of the menu item and category repos.
#[derive(Clone)]
pub struct PostgresPersistence {
    pool: PgPool,
}

impl PostgresPersistence {
    pub fn new(pool: PgPool) -> Self {
        PostgresPersistence { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::NotFound,
            _ => {
                // Details stay in the log; clients only see a 500.
                tracing::error!(error = ?err, "Menu store query failed");
                AppError::Database("Database operation failed".into())
            }
        }
    }
}
