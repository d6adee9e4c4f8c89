//! Session lifecycle orchestration — login, refresh, logout, register.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use warden_core::error::AppError;
use warden_core::events::AuditEvent;
use warden_core::traits::AuditSink;
use warden_entity::user::{CreateUser, CredentialStore, User, UserRole};

use crate::jwt::JwtEncoder;
use crate::password::PasswordHasher;

use super::store::RefreshTokenStore;

/// The pair of credentials handed back after login or refresh.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SessionTokens {
    /// Self-contained access token.
    pub access_token: String,
    /// When the access token lapses.
    pub access_expires_at: DateTime<Utc>,
    /// Opaque refresh token value.
    pub refresh_token: String,
    /// When the refresh token stops being exchangeable.
    pub refresh_expires_at: DateTime<Utc>,
}

/// Result of a successful login or refresh.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// Generated token pair.
    pub tokens: SessionTokens,
    /// The authenticated principal.
    pub user: User,
}

/// Orchestrates the complete token lifecycle.
///
/// Holds no token state of its own: access tokens are stateless after
/// minting, and refresh tokens live behind the store.
#[derive(Clone)]
pub struct SessionManager {
    /// Principal records.
    users: Arc<dyn CredentialStore>,
    /// Refresh token issuance and revocation.
    tokens: RefreshTokenStore,
    /// Access token minting.
    encoder: Arc<JwtEncoder>,
    /// Password hashing and verification.
    hasher: Arc<PasswordHasher>,
    /// Fire-and-forget audit emission.
    audit: Arc<dyn AuditSink>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager").finish()
    }
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(
        users: Arc<dyn CredentialStore>,
        tokens: RefreshTokenStore,
        encoder: Arc<JwtEncoder>,
        hasher: Arc<PasswordHasher>,
        audit: Arc<dyn AuditSink>,
    ) -> Self {
        Self {
            users,
            tokens,
            encoder,
            hasher,
            audit,
        }
    }

    /// Performs the complete login flow:
    ///
    /// 1. Look up the principal by identifier
    /// 2. Verify the secret against the stored hash
    /// 3. Reject disabled principals
    /// 4. Mint an access token and issue a refresh token (superseding
    ///    any previous session for this principal)
    ///
    /// An unknown identifier and a wrong secret produce the same error.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AppError> {
        // Step 1: Find the principal
        let Some(user) = self.users.find_by_email(email).await? else {
            warn!("Login rejected: unknown identifier");
            return Err(AppError::invalid_credentials());
        };

        // Step 2: Verify the secret
        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login rejected: wrong password");
            return Err(AppError::invalid_credentials());
        }

        // Step 3: Disabled principals cannot authenticate
        if !user.enabled {
            warn!(user_id = %user.id, "Login rejected: account disabled");
            return Err(AppError::account_disabled());
        }

        // Step 4: Mint and issue
        let result = self.open_session(user).await?;

        self.audit
            .record(AuditEvent::login(result.user.id, &result.user.email));
        info!(user_id = %result.user.id, "Login successful");

        Ok(result)
    }

    /// Exchanges a refresh token for a new token pair, rotating the
    /// refresh token in the process:
    ///
    /// 1. Look up the presented value
    /// 2. Expired records are deleted and reported distinctly
    /// 3. Re-derive the owning principal; it must still exist and be
    ///    enabled
    /// 4. Atomically revoke the presented value, then issue the
    ///    replacement
    ///
    /// The revoke-first order is what settles races: of two callers
    /// presenting the same value (or a refresh racing a logout), exactly
    /// one deletes it; the other observes `InvalidRefreshToken`.
    pub async fn refresh(&self, refresh_token: &str) -> Result<LoginResult, AppError> {
        // Step 1: Resolve the record
        let record = self.tokens.lookup(refresh_token).await?;

        // Step 2: Expiry check; stale records are removed on sight
        if record.is_expired() {
            if let Err(e) = self.tokens.revoke(&record.token).await {
                warn!(user_id = %record.user_id, error = %e, "Failed to remove expired refresh token");
            }
            warn!(user_id = %record.user_id, "Refresh rejected: token expired");
            return Err(AppError::refresh_token_expired());
        }

        // Step 3: Re-derive the owner
        let Some(user) = self.users.find_by_id(record.user_id).await? else {
            // Owner vanished; drop the dangling record and stay non-leaky.
            let _ = self.tokens.revoke(&record.token).await;
            warn!(user_id = %record.user_id, "Refresh rejected: owner no longer exists");
            return Err(AppError::invalid_refresh_token());
        };

        if !user.enabled {
            warn!(user_id = %user.id, "Refresh rejected: account disabled");
            return Err(AppError::account_disabled());
        }

        // Step 4: Rotate. Whoever deletes the old value first wins.
        if !self.tokens.revoke(&record.token).await? {
            warn!(user_id = %user.id, "Refresh rejected: token already revoked");
            return Err(AppError::invalid_refresh_token());
        }

        let result = self.open_session(user).await?;

        self.audit.record(AuditEvent::token_refresh(result.user.id));
        info!(user_id = %result.user.id, "Token refreshed");

        Ok(result)
    }

    /// Revokes the session behind the presented refresh token.
    ///
    /// Idempotent: unknown or already-revoked values succeed quietly.
    /// Outstanding access tokens are not blocklisted; they lapse at
    /// their expiry.
    pub async fn logout(&self, refresh_token: &str) -> Result<(), AppError> {
        let record = self.tokens.lookup(refresh_token).await;

        let Ok(record) = record else {
            info!("Logout for unknown refresh token; nothing to do");
            return Ok(());
        };

        if self.tokens.revoke(&record.token).await? {
            self.audit.record(AuditEvent::logout(record.user_id));
            info!(user_id = %record.user_id, "Logout completed");
        }

        Ok(())
    }

    /// Creates a new principal.
    ///
    /// The identifier must be unused; the uniqueness check is the
    /// storage backend's constraint, not a pre-read here. Returns the
    /// created principal without opening a session.
    pub async fn register(
        &self,
        actor_id: Uuid,
        email: &str,
        password: &str,
        full_name: &str,
        role: UserRole,
    ) -> Result<User, AppError> {
        let password_hash = self.hasher.hash_password(password)?;

        let user = self
            .users
            .insert(CreateUser {
                email: email.to_string(),
                full_name: full_name.to_string(),
                password_hash,
                role,
            })
            .await?;

        self.audit.record(AuditEvent::register(
            actor_id,
            user.id,
            &user.email,
            user.role.as_str(),
        ));
        info!(user_id = %user.id, role = %user.role, "Principal registered");

        Ok(user)
    }

    /// Mint an access token and issue a refresh token for the principal.
    async fn open_session(&self, user: User) -> Result<LoginResult, AppError> {
        let (access_token, access_expires_at) = self.encoder.mint_access(&user)?;
        let refresh = self.tokens.issue(user.id).await?;

        Ok(LoginResult {
            tokens: SessionTokens {
                access_token,
                access_expires_at,
                refresh_token: refresh.token,
                refresh_expires_at: refresh.expiry_date,
            },
            user,
        })
    }
}
