//! PostgreSQL connection pool management.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::info;

use folderhub_core::config::DatabaseConfig;
use folderhub_core::error::{AppError, ErrorKind};

/// Owns the sqlx pool behind the PostgreSQL folder store.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Open a pool sized and timed according to `config`.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let options = connect_options(config)?;

        info!(
            host = options.get_host(),
            port = options.get_port(),
            database = options.get_database().unwrap_or("<default>"),
            max_connections = config.max_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect_with(options)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to connect to database: {e}"),
                    e,
                )
            })?;

        Ok(Self { pool })
    }

    /// The underlying sqlx pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Wait for checked-out connections and close the pool.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}

/// Parse the configured URL. The credentials never reach the logs.
fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions, AppError> {
    if config.url.trim().is_empty() {
        return Err(AppError::configuration(
            "database.url is required for the postgres provider",
        ));
    }

    PgConnectOptions::from_str(&config.url).map_err(|e| {
        AppError::with_source(ErrorKind::Configuration, "database.url is not a valid URL", e)
    })
}
