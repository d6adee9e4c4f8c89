//! Refresh token entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted refresh token: one live session for one principal.
///
/// The token value is opaque, carries no claims, and means nothing
/// without this row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RefreshToken {
    /// Row identifier.
    pub id: Uuid,
    /// The opaque token value handed to the client.
    #[serde(skip_serializing)]
    pub token: String,
    /// The owning principal.
    pub user_id: Uuid,
    /// When the token stops being exchangeable.
    pub expiry_date: DateTime<Utc>,
    /// When the token was issued.
    pub created_at: DateTime<Utc>,
}

impl RefreshToken {
    /// Whether the token's lifetime has lapsed. `now == expiry_date`
    /// counts as expired.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expiry_date
    }
}
