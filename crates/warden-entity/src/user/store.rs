//! Credential store port.

use async_trait::async_trait;
use uuid::Uuid;

use warden_core::AppResult;

use super::model::{CreateUser, User};

/// Access to the principal records behind the token flows.
///
/// Implementations must surface an identifier-uniqueness violation on
/// `insert` as `ErrorKind::DuplicateIdentifier`; callers never pre-read
/// to check availability.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up a principal by login identifier.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Look up a principal by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// List all principals, newest first.
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Create a principal. Duplicate identifiers fail with
    /// `DuplicateIdentifier`.
    async fn insert(&self, user: CreateUser) -> AppResult<User>;

    /// Enable or disable a principal. Returns the updated row, or
    /// `None` when no such principal exists.
    async fn set_enabled(&self, id: Uuid, enabled: bool) -> AppResult<Option<User>>;
}
