//! PostgreSQL audit trail store.

use async_trait::async_trait;
use sqlx::PgPool;

use warden_core::error::{AppError, ErrorKind};
use warden_core::events::AuditEvent;
use warden_core::result::AppResult;
use warden_entity::audit::{AuditLog, AuditLogStore, AuditQuery};

/// Audit trail store backed by the `audit_logs` table.
#[derive(Debug, Clone)]
pub struct PostgresAuditLogStore {
    pool: PgPool,
}

impl PostgresAuditLogStore {
    /// Create a new store over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditLogStore for PostgresAuditLogStore {
    async fn append(&self, event: &AuditEvent) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO audit_logs \
             (user_id, action, entity_type, entity_id, \"timestamp\", details, \
              ip_address, user_agent, service_name) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(event.user_id)
        .bind(&event.action)
        .bind(&event.entity_type)
        .bind(&event.entity_id)
        .bind(event.timestamp)
        .bind(&event.details)
        .bind(&event.ip_address)
        .bind(&event.user_agent)
        .bind(&event.service_name)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to append audit entry", e)
        })?;
        Ok(())
    }

    async fn search(&self, query: &AuditQuery) -> AppResult<(Vec<AuditLog>, u64)> {
        let mut conditions = Vec::new();
        let mut param_idx = 1u32;

        if query.user_id.is_some() {
            conditions.push(format!("user_id = ${param_idx}"));
            param_idx += 1;
        }
        if query.action.is_some() {
            conditions.push(format!("action = ${param_idx}"));
            param_idx += 1;
        }
        if query.entity_type.is_some() {
            conditions.push(format!("entity_type = ${param_idx}"));
            param_idx += 1;
        }
        if query.service_name.is_some() {
            conditions.push(format!("service_name = ${param_idx}"));
            param_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) FROM audit_logs {where_clause}");
        let select_sql = format!(
            "SELECT * FROM audit_logs {where_clause} \
             ORDER BY \"timestamp\" DESC LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        let mut select_query = sqlx::query_as::<_, AuditLog>(&select_sql);

        if let Some(uid) = query.user_id {
            count_query = count_query.bind(uid);
            select_query = select_query.bind(uid);
        }
        if let Some(ref action) = query.action {
            count_query = count_query.bind(action.clone());
            select_query = select_query.bind(action.clone());
        }
        if let Some(ref entity_type) = query.entity_type {
            count_query = count_query.bind(entity_type.clone());
            select_query = select_query.bind(entity_type.clone());
        }
        if let Some(ref service) = query.service_name {
            count_query = count_query.bind(service.clone());
            select_query = select_query.bind(service.clone());
        }

        let total = count_query.fetch_one(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count audit entries", e)
        })?;

        let entries = select_query
            .bind(query.page.limit() as i64)
            .bind(query.page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to search audit trail", e)
            })?;

        Ok((entries, total as u64))
    }
}
