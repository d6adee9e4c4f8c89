//! PostgreSQL refresh token repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use warden_core::error::{AppError, ErrorKind};
use warden_core::result::AppResult;
use warden_entity::token::{RefreshToken, RefreshTokenRepository};

/// Refresh token repository backed by the `refresh_tokens` table.
///
/// The table carries a unique index on `user_id`; the upsert below is
/// what enforces the one-live-session-per-principal rule, so no caller
/// ever has to read before writing.
#[derive(Debug, Clone)]
pub struct PostgresRefreshTokenRepository {
    pool: PgPool,
}

impl PostgresRefreshTokenRepository {
    /// Create a new repository over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RefreshTokenRepository for PostgresRefreshTokenRepository {
    async fn upsert(&self, token: &RefreshToken) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO refresh_tokens (id, token, user_id, expiry_date, created_at) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (user_id) DO UPDATE \
             SET id = EXCLUDED.id, \
                 token = EXCLUDED.token, \
                 expiry_date = EXCLUDED.expiry_date, \
                 created_at = EXCLUDED.created_at",
        )
        .bind(token.id)
        .bind(&token.token)
        .bind(token.user_id)
        .bind(token.expiry_date)
        .bind(token.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to store refresh token", e)
        })?;
        Ok(())
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<RefreshToken>> {
        sqlx::query_as::<_, RefreshToken>("SELECT * FROM refresh_tokens WHERE token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to look up refresh token", e)
            })
    }

    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<RefreshToken>> {
        sqlx::query_as::<_, RefreshToken>("SELECT * FROM refresh_tokens WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to look up refresh token by user",
                    e,
                )
            })
    }

    async fn delete_by_token(&self, token: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete refresh token", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_expired(&self, before: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE expiry_date <= $1")
            .bind(before)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to delete expired refresh tokens",
                    e,
                )
            })?;
        Ok(result.rows_affected())
    }
}
