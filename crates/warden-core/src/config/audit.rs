//! Audit pipeline settings.

use serde::{Deserialize, Serialize};

/// Queue sizing and ingestion credentials for the audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Capacity of the in-process audit event queue. Events beyond this
    /// are dropped with a warning rather than blocking the request path.
    pub queue_capacity: usize,
    /// Shared key sibling services present in `X-API-Key` when posting
    /// audit entries. An empty value disables the ingestion endpoint.
    pub api_key: String,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            queue_capacity: 1024,
            api_key: String::new(),
        }
    }
}
