//! Admin audit trail query handler.

use axum::Json;
use axum::extract::{Query, State};

use warden_core::types::PageResponse;
use warden_entity::audit::AuditLog;

use crate::dto::request::AuditSearchParams;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::middleware::rbac::require_authority;
use crate::state::AppState;

/// GET /api/admin/audit
pub async fn search_audit(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<AuditSearchParams>,
) -> Result<Json<ApiResponse<PageResponse<AuditLog>>>, ApiError> {
    require_authority(&auth)?;

    let query = params.into_query();
    let (rows, total) = state.storage.audit_logs.search(&query).await?;

    Ok(Json(ApiResponse::ok(PageResponse::new(
        rows,
        query.page.page,
        query.page.page_size,
        total,
    ))))
}
