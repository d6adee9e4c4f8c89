//! Embedded schema migrations.

use sqlx::PgPool;
use tracing::info;

use warden_core::error::{AppError, ErrorKind};

/// Apply any migrations the database has not seen yet.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Applying schema migrations");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Migration failed: {e}"), e)
        })?;

    info!("Schema is up to date");
    Ok(())
}
