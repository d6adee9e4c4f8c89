//! In-memory refresh token repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use warden_core::result::AppResult;
use warden_entity::token::{RefreshToken, RefreshTokenRepository};

/// Refresh token repository keyed by owner.
///
/// Keying the map on `user_id` gives the same one-session-per-principal
/// guarantee the Postgres unique index provides: inserting for an owner
/// replaces their previous session in one step under the lock.
#[derive(Debug, Clone, Default)]
pub struct MemoryRefreshTokenRepository {
    /// Live sessions keyed by owning principal.
    state: Arc<Mutex<HashMap<Uuid, RefreshToken>>>,
}

impl MemoryRefreshTokenRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RefreshTokenRepository for MemoryRefreshTokenRepository {
    async fn upsert(&self, token: &RefreshToken) -> AppResult<()> {
        let mut state = self.state.lock().await;
        state.insert(token.user_id, token.clone());
        Ok(())
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<RefreshToken>> {
        let state = self.state.lock().await;
        Ok(state.values().find(|t| t.token == token).cloned())
    }

    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<RefreshToken>> {
        let state = self.state.lock().await;
        Ok(state.get(&user_id).cloned())
    }

    async fn delete_by_token(&self, token: &str) -> AppResult<bool> {
        let mut state = self.state.lock().await;
        let owner = state
            .values()
            .find(|t| t.token == token)
            .map(|t| t.user_id);
        match owner {
            Some(user_id) => {
                state.remove(&user_id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_expired(&self, before: DateTime<Utc>) -> AppResult<u64> {
        let mut state = self.state.lock().await;
        let before_len = state.len();
        state.retain(|_, t| t.expiry_date > before);
        Ok((before_len - state.len()) as u64)
    }
}
