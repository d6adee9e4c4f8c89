//! Storage backend selection.

use std::sync::Arc;

use tracing::info;

use warden_core::config::DatabaseConfig;
use warden_core::error::AppError;
use warden_core::result::AppResult;
use warden_entity::audit::AuditLogStore;
use warden_entity::token::RefreshTokenRepository;
use warden_entity::user::CredentialStore;

use crate::connection::DatabasePool;
use crate::memory::{MemoryAuditLogStore, MemoryCredentialStore, MemoryRefreshTokenRepository};
use crate::migration;
use crate::postgres::{
    PostgresAuditLogStore, PostgresCredentialStore, PostgresRefreshTokenRepository,
};

/// The set of storage ports the rest of the application runs against.
///
/// The backend is selected at startup based on configuration; everything
/// above this layer sees only the port traits.
#[derive(Clone)]
pub struct StorageBackend {
    /// Which backend was selected (`"postgres"` or `"memory"`).
    pub name: String,
    /// Principal records.
    pub users: Arc<dyn CredentialStore>,
    /// Refresh token records.
    pub refresh_tokens: Arc<dyn RefreshTokenRepository>,
    /// Audit trail records.
    pub audit_logs: Arc<dyn AuditLogStore>,
    /// The pool, when the Postgres backend is active. Health checks use it.
    pub pool: Option<DatabasePool>,
}

impl StorageBackend {
    /// Connect the configured backend. The Postgres path also runs any
    /// pending migrations.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.backend.as_str() {
            "postgres" => {
                info!("Initializing PostgreSQL storage backend");
                let db = DatabasePool::connect(config).await?;
                migration::run_migrations(db.pool()).await?;
                let pool = db.pool().clone();
                Ok(Self {
                    name: "postgres".to_string(),
                    users: Arc::new(PostgresCredentialStore::new(pool.clone())),
                    refresh_tokens: Arc::new(PostgresRefreshTokenRepository::new(pool.clone())),
                    audit_logs: Arc::new(PostgresAuditLogStore::new(pool)),
                    pool: Some(db),
                })
            }
            "memory" => {
                info!("Initializing in-memory storage backend");
                Ok(Self::memory())
            }
            other => Err(AppError::configuration(format!(
                "Unknown storage backend: '{other}'. Supported: postgres, memory"
            ))),
        }
    }

    /// Build the in-memory backend directly (used by tests).
    pub fn memory() -> Self {
        Self {
            name: "memory".to_string(),
            users: Arc::new(MemoryCredentialStore::new()),
            refresh_tokens: Arc::new(MemoryRefreshTokenRepository::new()),
            audit_logs: Arc::new(MemoryAuditLogStore::new()),
            pool: None,
        }
    }

    /// Check backend health. The memory backend is always healthy.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }

    /// Release backend resources. Closes the pool on Postgres.
    pub async fn shutdown(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
