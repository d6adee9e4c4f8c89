//! In-memory credential store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use warden_core::error::AppError;
use warden_core::result::AppResult;
use warden_entity::user::{CreateUser, CredentialStore, User};

/// Credential store holding principals in a mutex-guarded map.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    /// Principals keyed by id.
    state: Arc<Mutex<HashMap<Uuid, User>>>,
}

impl MemoryCredentialStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let state = self.state.lock().await;
        Ok(state
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let state = self.state.lock().await;
        Ok(state.get(&id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let state = self.state.lock().await;
        let mut users: Vec<User> = state.values().cloned().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }

    async fn insert(&self, user: CreateUser) -> AppResult<User> {
        let mut state = self.state.lock().await;

        // Uniqueness check and insert happen under the same lock.
        if state
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(AppError::duplicate_identifier(format!(
                "Email '{}' is already registered",
                user.email
            )));
        }

        let now = Utc::now();
        let row = User {
            id: Uuid::new_v4(),
            email: user.email,
            full_name: user.full_name,
            password_hash: user.password_hash,
            role: user.role,
            enabled: true,
            created_at: now,
            updated_at: now,
        };
        state.insert(row.id, row.clone());
        Ok(row)
    }

    async fn set_enabled(&self, id: Uuid, enabled: bool) -> AppResult<Option<User>> {
        let mut state = self.state.lock().await;
        Ok(state.get_mut(&id).map(|u| {
            u.enabled = enabled;
            u.updated_at = Utc::now();
            u.clone()
        }))
    }
}
