//! Auth handlers — login, refresh, logout, validate-token.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use validator::Validate;

use warden_core::error::AppError;

use crate::dto::request::{LoginRequest, LogoutRequest, RefreshRequest};
use crate::dto::response::{ApiResponse, AuthResponse, MessageResponse, ValidationResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let result = state.session_manager.login(&req.email, &req.password).await?;

    Ok(Json(ApiResponse::ok(AuthResponse::from(result))))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    let result = state.session_manager.refresh(&req.refresh_token).await?;

    Ok(Json(ApiResponse::ok(AuthResponse::from(result))))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    Json(req): Json<LogoutRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.session_manager.logout(&req.refresh_token).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Logged out successfully".to_string(),
    })))
}

/// POST /api/auth/validate-token
///
/// Reads the Authorization header directly instead of using the
/// `AuthUser` extractor: the extractor rejects disabled principals, but
/// this endpoint reports `enabled` as data and leaves the decision to
/// the calling service.
pub async fn validate_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<ValidationResponse>>, ApiError> {
    let header = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(AppError::malformed_header)?;

    let validated = state.validator.validate_header(header).await?;

    Ok(Json(ApiResponse::ok(ValidationResponse::from(validated))))
}
