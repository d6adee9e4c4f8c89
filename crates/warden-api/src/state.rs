//! Shared handler dependencies.

use std::sync::Arc;

use warden_auth::session::SessionManager;
use warden_auth::validator::TokenValidator;
use warden_core::config::AppConfig;
use warden_core::traits::AuditSink;
use warden_database::StorageBackend;

/// Everything a handler can reach, cloned cheaply into each task via
/// Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// Selected storage backend (credential, refresh token, and audit ports).
    pub storage: StorageBackend,
    /// Session lifecycle orchestrator.
    pub session_manager: Arc<SessionManager>,
    /// Access token validator.
    pub validator: Arc<TokenValidator>,
    /// Fire-and-forget audit emission for request-path events.
    pub audit_sink: Arc<dyn AuditSink>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("backend", &self.storage.name)
            .finish()
    }
}
