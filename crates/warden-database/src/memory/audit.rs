//! In-memory audit trail store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use warden_core::events::AuditEvent;
use warden_core::result::AppResult;
use warden_entity::audit::{AuditLog, AuditLogStore, AuditQuery};

/// Audit trail store appending rows to a mutex-guarded vector.
#[derive(Debug, Clone, Default)]
pub struct MemoryAuditLogStore {
    /// Entries in insertion order.
    state: Arc<Mutex<Vec<AuditLog>>>,
}

impl MemoryAuditLogStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuditLogStore for MemoryAuditLogStore {
    async fn append(&self, event: &AuditEvent) -> AppResult<()> {
        let row = AuditLog {
            id: Uuid::new_v4(),
            user_id: event.user_id,
            action: event.action.clone(),
            entity_type: event.entity_type.clone(),
            entity_id: event.entity_id.clone(),
            timestamp: event.timestamp,
            details: event.details.clone(),
            ip_address: event.ip_address.clone(),
            user_agent: event.user_agent.clone(),
            service_name: event.service_name.clone(),
            created_at: Utc::now(),
        };
        self.state.lock().await.push(row);
        Ok(())
    }

    async fn search(&self, query: &AuditQuery) -> AppResult<(Vec<AuditLog>, u64)> {
        let state = self.state.lock().await;
        let mut matches: Vec<AuditLog> = state
            .iter()
            .filter(|row| query.user_id.is_none_or(|uid| row.user_id == Some(uid)))
            .filter(|row| {
                query
                    .action
                    .as_deref()
                    .is_none_or(|action| row.action == action)
            })
            .filter(|row| {
                query
                    .entity_type
                    .as_deref()
                    .is_none_or(|et| row.entity_type == et)
            })
            .filter(|row| {
                query
                    .service_name
                    .as_deref()
                    .is_none_or(|svc| row.service_name.as_deref() == Some(svc))
            })
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let total = matches.len() as u64;
        let offset = query.page.offset() as usize;
        let limit = query.page.limit() as usize;
        let page: Vec<AuditLog> = matches.into_iter().skip(offset).take(limit).collect();
        Ok((page, total))
    }
}
