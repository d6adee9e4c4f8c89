//! Audit trail entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted audit trail entry.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuditLog {
    /// Row identifier.
    pub id: Uuid,
    /// The principal the event concerns, when known.
    pub user_id: Option<Uuid>,
    /// What happened.
    pub action: String,
    /// The kind of entity acted upon.
    pub entity_type: String,
    /// Identifier of the acted-upon entity.
    pub entity_id: Option<String>,
    /// When the event occurred (as reported by the emitter).
    pub timestamp: DateTime<Utc>,
    /// Free-form structured context.
    pub details: Option<serde_json::Value>,
    /// Client IP address.
    pub ip_address: Option<String>,
    /// Client user agent.
    pub user_agent: Option<String>,
    /// The service that produced the event.
    pub service_name: Option<String>,
    /// When the row was written.
    pub created_at: DateTime<Utc>,
}
