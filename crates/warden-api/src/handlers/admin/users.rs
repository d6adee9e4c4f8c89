//! Admin principal management handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use warden_core::error::AppError;
use warden_core::events::AuditEvent;
use warden_entity::user::UserRole;

use crate::dto::request::{ChangeStatusRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>, ApiError> {
    require_admin(&auth)?;

    let users = state.storage.users.list().await?;
    let summaries = users.iter().map(UserResponse::from).collect();

    Ok(Json(ApiResponse::ok(summaries)))
}

/// POST /api/admin/register
///
/// The only registration path; there is no self-service signup. Returns
/// the created principal without opening a session for it.
pub async fn register(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    require_admin(&auth)?;
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let role = match req.role.as_deref() {
        Some(name) => name.parse::<UserRole>()?,
        None => UserRole::User,
    };

    let user = state
        .session_manager
        .register(auth.id, &req.email, &req.password, &req.full_name, role)
        .await?;

    Ok(Json(ApiResponse::ok(UserResponse::from(&user))))
}

/// PUT /api/admin/users/{id}/status
pub async fn change_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ChangeStatusRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    require_admin(&auth)?;

    if id == auth.id && !req.enabled {
        return Err(ApiError(AppError::forbidden(
            "Administrators cannot disable their own account",
        )));
    }

    let Some(user) = state.storage.users.set_enabled(id, req.enabled).await? else {
        return Err(ApiError(AppError::not_found("User not found")));
    };

    state
        .audit_sink
        .record(AuditEvent::status_change(auth.id, id, req.enabled));

    Ok(Json(ApiResponse::ok(UserResponse::from(&user))))
}
