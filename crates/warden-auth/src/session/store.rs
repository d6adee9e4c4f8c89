//! Refresh token issuance and revocation over the persistence port.

use std::sync::Arc;

use chrono::{Duration, Utc};
use rand::{Rng, distr::Alphanumeric};
use uuid::Uuid;

use warden_core::config::auth::AuthConfig;
use warden_core::error::AppError;
use warden_entity::token::{RefreshToken, RefreshTokenRepository};

/// Length of generated token values. 48 alphanumeric characters carry
/// just under 286 bits of entropy, comfortably past the 128-bit floor.
const TOKEN_VALUE_LEN: usize = 48;

/// Issues, looks up, and revokes opaque refresh tokens.
///
/// Generation and TTL policy live here; the atomicity of
/// replace-on-issue lives in the repository behind the port.
#[derive(Clone)]
pub struct RefreshTokenStore {
    /// Persistence for token records.
    repository: Arc<dyn RefreshTokenRepository>,
    /// Refresh token TTL in hours.
    refresh_ttl_hours: i64,
}

impl std::fmt::Debug for RefreshTokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshTokenStore")
            .field("refresh_ttl_hours", &self.refresh_ttl_hours)
            .finish()
    }
}

impl RefreshTokenStore {
    /// Creates a new store.
    pub fn new(repository: Arc<dyn RefreshTokenRepository>, config: &AuthConfig) -> Self {
        Self {
            repository,
            refresh_ttl_hours: config.refresh_ttl_hours as i64,
        }
    }

    /// Issues a fresh token for the principal, superseding any live
    /// session they already have. The swap is a single atomic step in
    /// the repository; there is no read-then-write window.
    pub async fn issue(&self, user_id: Uuid) -> Result<RefreshToken, AppError> {
        let now = Utc::now();
        let record = RefreshToken {
            id: Uuid::new_v4(),
            token: generate_token_value(),
            user_id,
            expiry_date: now + Duration::hours(self.refresh_ttl_hours),
            created_at: now,
        };
        self.repository.upsert(&record).await?;
        Ok(record)
    }

    /// Looks up a token by value. Unknown values fail with
    /// `InvalidRefreshToken`; whether the record is expired is the
    /// caller's concern.
    pub async fn lookup(&self, value: &str) -> Result<RefreshToken, AppError> {
        self.repository
            .find_by_token(value)
            .await?
            .ok_or_else(AppError::invalid_refresh_token)
    }

    /// Deletes a token by value. Returns whether anything was removed;
    /// revoking an absent token is not an error.
    pub async fn revoke(&self, value: &str) -> Result<bool, AppError> {
        self.repository.delete_by_token(value).await
    }

    /// Removes every token that has expired as of now. Returns the
    /// number removed. Runs off the request path.
    pub async fn sweep_expired(&self) -> Result<u64, AppError> {
        self.repository.delete_expired(Utc::now()).await
    }
}

/// Generate an opaque token value from the thread-local CSPRNG.
fn generate_token_value() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_VALUE_LEN)
        .map(char::from)
        .collect()
}
