pub mod beans;
pub mod models;
pub mod users;

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::AppConfig;

/// Shared per-process state: the connection pool and loaded configuration.
/// Constructed once in main and injected into handlers; the pool's
/// checkout/checkin discipline is sqlx's.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn connect(config: AppConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await?;
        info!("Created database pool (max_connections={})", config.max_connections);

        Ok(Self {
            pool,
            config: Arc::new(config),
        })
    }

    /// Run embedded migrations against the pool.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }

    /// Pings the pool to ensure connectivity.
    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close the pool on shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Closed database pool");
    }
}
