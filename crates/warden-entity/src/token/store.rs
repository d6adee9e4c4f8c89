//! Refresh token persistence port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use warden_core::AppResult;

use super::model::RefreshToken;

/// Persistence behind the refresh token store.
///
/// The single-active-session invariant lives here: `upsert` must replace
/// any existing row for the same owner in one atomic step, never as a
/// read followed by a write. Token values are unique across the table.
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Insert the token, replacing the owner's previous session if one
    /// exists.
    async fn upsert(&self, token: &RefreshToken) -> AppResult<()>;

    /// Look up a token by its opaque value.
    async fn find_by_token(&self, token: &str) -> AppResult<Option<RefreshToken>>;

    /// Look up the live session for a principal, if any.
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<RefreshToken>>;

    /// Delete by value. Returns whether a row was removed; absent rows
    /// are not an error.
    async fn delete_by_token(&self, token: &str) -> AppResult<bool>;

    /// Delete every token whose expiry is at or before `before`.
    /// Returns the number of rows removed.
    async fn delete_expired(&self, before: DateTime<Utc>) -> AppResult<u64>;
}
