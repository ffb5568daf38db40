//! Schema migrations embedded from the workspace `migrations/` directory.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use folderhub_core::error::{AppError, ErrorKind};

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Apply any migrations the database has not seen yet.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!(known = MIGRATOR.iter().count(), "Applying folder schema migrations");

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to run migrations: {e}"),
            e,
        )
    })?;

    info!("Folder schema is up to date");
    Ok(())
}
