//! Expiry sweeper — periodically deletes lapsed refresh tokens.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time;

use super::store::RefreshTokenStore;

/// Background task that clears expired refresh tokens from storage.
///
/// Expired tokens are already unusable (the refresh flow rejects them
/// on sight); the sweeper exists so dead rows do not pile up.
#[derive(Debug, Clone)]
pub struct ExpirySweeper {
    /// Refresh token storage.
    store: RefreshTokenStore,
    /// Seconds between sweeps.
    interval_seconds: u64,
}

impl ExpirySweeper {
    /// Create a new sweeper over the given store.
    pub fn new(store: RefreshTokenStore, interval_seconds: u64) -> Self {
        Self {
            store,
            interval_seconds,
        }
    }

    /// Run until the cancel signal is received.
    pub async fn run(self, mut cancel: watch::Receiver<bool>) {
        tracing::info!(
            "Expiry sweeper started with interval={}s",
            self.interval_seconds
        );

        let interval = Duration::from_secs(self.interval_seconds);

        loop {
            tokio::select! {
                _ = cancel.changed() => {
                    if *cancel.borrow() {
                        tracing::info!("Expiry sweeper received shutdown signal");
                        break;
                    }
                }
                _ = time::sleep(interval) => {
                    self.sweep_once().await;
                }
            }
        }

        tracing::info!("Expiry sweeper shut down");
    }

    /// Perform a single sweep, logging the outcome.
    pub async fn sweep_once(&self) {
        match self.store.sweep_expired().await {
            Ok(0) => {}
            Ok(removed) => {
                tracing::info!("Swept {} expired refresh token(s)", removed);
            }
            Err(e) => {
                tracing::error!("Refresh token sweep failed: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{Duration, Utc};
    use tokio::sync::watch;
    use uuid::Uuid;

    use warden_core::config::auth::AuthConfig;
    use warden_database::memory::MemoryRefreshTokenRepository;
    use warden_entity::token::{RefreshToken, RefreshTokenRepository};

    use crate::session::store::RefreshTokenStore;

    use super::ExpirySweeper;

    fn store_with(repo: Arc<MemoryRefreshTokenRepository>) -> RefreshTokenStore {
        RefreshTokenStore::new(repo, &AuthConfig::default())
    }

    #[tokio::test]
    async fn sweep_once_removes_expired_rows() {
        let repo = Arc::new(MemoryRefreshTokenRepository::new());
        let live_user = Uuid::new_v4();
        let stale_user = Uuid::new_v4();

        repo.upsert(&RefreshToken {
            id: Uuid::new_v4(),
            token: "live-token".to_string(),
            user_id: live_user,
            expiry_date: Utc::now() + Duration::hours(1),
            created_at: Utc::now(),
        })
        .await
        .unwrap();
        repo.upsert(&RefreshToken {
            id: Uuid::new_v4(),
            token: "stale-token".to_string(),
            user_id: stale_user,
            expiry_date: Utc::now() - Duration::hours(1),
            created_at: Utc::now(),
        })
        .await
        .unwrap();

        let sweeper = ExpirySweeper::new(store_with(repo.clone()), 3600);
        sweeper.sweep_once().await;

        assert!(repo.find_by_user(live_user).await.unwrap().is_some());
        assert!(repo.find_by_user(stale_user).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn run_stops_on_shutdown_signal() {
        let repo = Arc::new(MemoryRefreshTokenRepository::new());
        let sweeper = ExpirySweeper::new(store_with(repo), 3600);

        let (tx, rx) = watch::channel(false);
        let handle = tokio::spawn(sweeper.run(rx));

        tx.send(true).unwrap();
        handle.await.unwrap();
    }
}
