//! Audit trail store port.

use async_trait::async_trait;
use uuid::Uuid;

use warden_core::events::AuditEvent;
use warden_core::types::PageRequest;
use warden_core::AppResult;

use super::model::AuditLog;

/// Filters for querying the audit trail.
#[derive(Debug, Clone, Default)]
pub struct AuditQuery {
    /// Restrict to events about this principal.
    pub user_id: Option<Uuid>,
    /// Restrict to this action.
    pub action: Option<String>,
    /// Restrict to this entity type.
    pub entity_type: Option<String>,
    /// Restrict to events produced by this service.
    pub service_name: Option<String>,
    /// Page window.
    pub page: PageRequest,
}

/// Persistence for the audit trail.
#[async_trait]
pub trait AuditLogStore: Send + Sync {
    /// Append one event.
    async fn append(&self, event: &AuditEvent) -> AppResult<()>;

    /// Search entries matching the filters, newest first. Returns the
    /// page of rows plus the total match count.
    async fn search(&self, query: &AuditQuery) -> AppResult<(Vec<AuditLog>, u64)>;
}
