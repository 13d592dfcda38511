use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::info;

const MAX_CONNECTIONS: u32 = 5;

/// Connect to Postgres and bring the menu schema up to date.
pub async fn init_db(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await
        .map_err(|e| anyhow::anyhow!("Could not reach the menu database (check DATABASE_URL): {e}"))?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Menu schema migration failed: {e}"))?;

    info!(max_connections = MAX_CONNECTIONS, "Menu database ready");
    Ok(pool)
}
