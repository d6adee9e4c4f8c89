//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use warden_auth::session::LoginResult;
use warden_auth::validator::ValidatedUser;
use warden_entity::user::User;

/// Envelope for every successful response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Token pair plus principal summary, returned by login and refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub access_expires_at: DateTime<Utc>,
    pub refresh_expires_at: DateTime<Utc>,
    pub user: UserResponse,
}

impl From<LoginResult> for AuthResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            access_token: result.tokens.access_token,
            refresh_token: result.tokens.refresh_token,
            access_expires_at: result.tokens.access_expires_at,
            refresh_expires_at: result.tokens.refresh_expires_at,
            user: UserResponse::from(&result.user),
        }
    }
}

/// Principal summary. Never carries the password hash; the conversion
/// below copies fields explicitly to keep it that way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            role: user.role.to_string(),
            enabled: user.enabled,
            created_at: user.created_at,
        }
    }
}

/// Body of a successful `POST /api/auth/validate-token` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResponse {
    pub user_id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: String,
    /// Current enabled state; consumers decide what to do with it.
    pub enabled: bool,
}

impl From<ValidatedUser> for ValidationResponse {
    fn from(user: ValidatedUser) -> Self {
        Self {
            user_id: user.id,
            email: user.email,
            full_name: user.full_name,
            role: user.role.to_string(),
            enabled: user.enabled,
        }
    }
}

/// Plain acknowledgement body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Liveness summary for `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub backend: String,
}
