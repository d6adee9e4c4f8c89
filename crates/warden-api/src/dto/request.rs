//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use warden_core::types::PageRequest;
use warden_entity::audit::AuditQuery;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email identifier.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Refresh token value.
    pub refresh_token: String,
}

/// Logout request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutRequest {
    /// Refresh token value to revoke.
    pub refresh_token: String,
}

/// Create principal request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email identifier.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    /// Display name.
    #[validate(length(min = 1, max = 255, message = "Full name is required"))]
    pub full_name: String,
    /// Role name; defaults to `user` when omitted.
    pub role: Option<String>,
}

/// Enable/disable request (admin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeStatusRequest {
    /// Target enabled state.
    pub enabled: bool,
}

/// External audit entry submission.
///
/// `timestamp` arrives as an ISO-8601 string from sibling services; an
/// absent or unparseable value falls back to ingestion time.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AuditLogRequest {
    /// Principal the event concerns.
    pub user_id: Uuid,
    /// What happened, e.g. `CREATE`, `UPDATE`, `DELETE`.
    #[validate(length(min = 1, max = 100, message = "Action is required"))]
    pub action: String,
    /// Kind of entity acted upon, e.g. `ORDER`, `PAYMENT`.
    #[validate(length(min = 1, max = 100, message = "Entity type is required"))]
    pub entity_type: String,
    /// Identifier of the acted-upon entity.
    pub entity_id: Option<String>,
    /// ISO-8601 event time.
    pub timestamp: Option<String>,
    /// Free-form structured context.
    pub details: Option<serde_json::Value>,
    /// Client IP address.
    pub ip_address: Option<String>,
    /// Client user agent.
    pub user_agent: Option<String>,
    /// Name of the submitting service.
    pub service_name: Option<String>,
}

/// Query parameters for audit search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditSearchParams {
    /// Restrict to events about this principal.
    pub user_id: Option<Uuid>,
    /// Restrict to this action.
    pub action: Option<String>,
    /// Restrict to this entity type.
    pub entity_type: Option<String>,
    /// Restrict to events produced by this service.
    pub service_name: Option<String>,
    /// Page number (1-based, default 1).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page (default 25, max 100).
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    25
}

impl AuditSearchParams {
    /// Converts to the storage-level query, clamping the page window.
    pub fn into_query(self) -> AuditQuery {
        AuditQuery {
            user_id: self.user_id,
            action: self.action,
            entity_type: self.entity_type,
            service_name: self.service_name,
            page: PageRequest::new(self.page, self.per_page),
        }
    }
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::{LoginRequest, RegisterRequest};

    #[test]
    fn login_requires_a_plausible_email() {
        let req = LoginRequest {
            email: "not-an-email".to_string(),
            password: "pw".to_string(),
        };
        assert!(req.validate().is_err());

        let req = LoginRequest {
            email: "a@example.com".to_string(),
            password: "pw".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn register_rejects_short_passwords() {
        let req = RegisterRequest {
            email: "a@example.com".to_string(),
            password: "five5".to_string(),
            full_name: "Person".to_string(),
            role: None,
        };
        assert!(req.validate().is_err());

        let req = RegisterRequest {
            password: "six666".to_string(),
            ..req
        };
        assert!(req.validate().is_ok());
    }
}
