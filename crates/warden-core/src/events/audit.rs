//! Audit trail events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Service name recorded on events emitted by this process.
pub const LOCAL_SERVICE: &str = "warden";

/// Well-known audit actions emitted by the session flows. External
/// services may submit arbitrary action strings of their own.
pub mod actions {
    /// A principal authenticated successfully.
    pub const LOGIN: &str = "LOGIN";
    /// A session was revoked by its owner.
    pub const LOGOUT: &str = "LOGOUT";
    /// A refresh token was exchanged and rotated.
    pub const TOKEN_REFRESH: &str = "TOKEN_REFRESH";
    /// A new principal was created.
    pub const REGISTER: &str = "REGISTER";
    /// A principal was enabled or disabled.
    pub const STATUS_CHANGE: &str = "STATUS_CHANGE";
}

/// A single audit trail entry, before persistence.
///
/// Internal flows build these through the constructors below; the
/// ingestion endpoint maps sibling-service submissions into the same
/// shape. `details` is free-form JSON and must never carry secret
/// material (token values, passwords, hashes).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// The principal the event concerns, when known.
    pub user_id: Option<Uuid>,
    /// What happened, e.g. `LOGIN` or `TOKEN_REFRESH`.
    pub action: String,
    /// The kind of entity acted upon, e.g. `USER`.
    pub entity_type: String,
    /// Identifier of the acted-upon entity, when distinct from `user_id`.
    pub entity_id: Option<String>,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// Free-form structured context.
    pub details: Option<serde_json::Value>,
    /// Client IP address, when the event came off a request.
    pub ip_address: Option<String>,
    /// Client user agent, when the event came off a request.
    pub user_agent: Option<String>,
    /// The service that produced the event.
    pub service_name: Option<String>,
}

impl AuditEvent {
    /// Create an event for an internal action against a principal.
    pub fn internal(user_id: Option<Uuid>, action: &str) -> Self {
        Self {
            user_id,
            action: action.to_string(),
            entity_type: "USER".to_string(),
            entity_id: None,
            timestamp: Utc::now(),
            details: None,
            ip_address: None,
            user_agent: None,
            service_name: Some(LOCAL_SERVICE.to_string()),
        }
    }

    /// A successful login.
    pub fn login(user_id: Uuid, email: &str) -> Self {
        Self::internal(Some(user_id), actions::LOGIN)
            .with_details(serde_json::json!({ "email": email }))
    }

    /// A session revoked by its owner.
    pub fn logout(user_id: Uuid) -> Self {
        Self::internal(Some(user_id), actions::LOGOUT)
    }

    /// A refresh token exchanged and rotated.
    pub fn token_refresh(user_id: Uuid) -> Self {
        Self::internal(Some(user_id), actions::TOKEN_REFRESH)
    }

    /// A principal created by an administrator.
    pub fn register(actor_id: Uuid, new_user_id: Uuid, email: &str, role: &str) -> Self {
        Self::internal(Some(actor_id), actions::REGISTER)
            .with_entity_id(new_user_id.to_string())
            .with_details(serde_json::json!({ "email": email, "role": role }))
    }

    /// A principal enabled or disabled by an administrator.
    pub fn status_change(actor_id: Uuid, target_id: Uuid, enabled: bool) -> Self {
        Self::internal(Some(actor_id), actions::STATUS_CHANGE)
            .with_entity_id(target_id.to_string())
            .with_details(serde_json::json!({ "enabled": enabled }))
    }

    /// Attach structured context to the event.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Attach an entity identifier to the event.
    pub fn with_entity_id(mut self, entity_id: String) -> Self {
        self.entity_id = Some(entity_id);
        self
    }
}
