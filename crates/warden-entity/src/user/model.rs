//! Principal entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A principal known to the credential store.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique principal identifier.
    pub id: Uuid,
    /// Unique login identifier.
    pub email: String,
    /// Human-readable display name.
    pub full_name: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Role claim carried into access tokens.
    pub role: UserRole,
    /// Whether the principal may authenticate.
    pub enabled: bool,
    /// When the principal was created.
    pub created_at: DateTime<Utc>,
    /// When the principal was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if this principal has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data required to create a new principal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Login identifier; unique across the store.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: UserRole,
}
