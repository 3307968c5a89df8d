use crate::config::AppConfig;
use sqlx::{PgPool, postgres::PgPoolOptions};

pub async fn init_pool(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.database_max_connections())
        .acquire_timeout(config.database_acquire_timeout())
        .connect(config.database_url())
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
