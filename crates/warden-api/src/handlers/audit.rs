//! External audit ingestion handler.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use chrono::{DateTime, Utc};
use tracing::{info, warn};
use validator::Validate;

use warden_core::error::AppError;
use warden_core::events::AuditEvent;

use crate::dto::request::AuditLogRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/audit/log
///
/// Sibling services submit audit entries here, authenticated by a shared
/// API key rather than a bearer token. Writes synchronously through the
/// store so the caller knows the entry landed.
pub async fn ingest(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<AuditLogRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    check_api_key(&state, &headers)?;
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let event = AuditEvent {
        user_id: Some(req.user_id),
        action: req.action,
        entity_type: req.entity_type,
        entity_id: req.entity_id,
        timestamp: parse_timestamp(req.timestamp.as_deref()),
        details: req.details,
        ip_address: req.ip_address,
        user_agent: req.user_agent,
        service_name: req.service_name,
    };

    state.storage.audit_logs.append(&event).await?;

    info!(
        action = %event.action,
        entity_type = %event.entity_type,
        service = event.service_name.as_deref().unwrap_or("unknown"),
        "External audit entry recorded"
    );

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Audit entry recorded".to_string(),
    })))
}

/// An empty configured key disables ingestion outright; otherwise the
/// `X-API-Key` header must match exactly.
fn check_api_key(state: &AppState, headers: &HeaderMap) -> Result<(), AppError> {
    let configured = &state.config.audit.api_key;
    if configured.is_empty() {
        return Err(AppError::forbidden("Audit ingestion is disabled"));
    }

    let presented = headers
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if presented != configured {
        return Err(AppError::unauthorized("Invalid API key"));
    }

    Ok(())
}

/// Submitted timestamps are best-effort: absent or unparseable values
/// fall back to ingestion time rather than rejecting the entry.
fn parse_timestamp(raw: Option<&str>) -> DateTime<Utc> {
    match raw {
        None => Utc::now(),
        Some(s) => match DateTime::parse_from_rfc3339(s) {
            Ok(t) => t.with_timezone(&Utc),
            Err(_) => {
                warn!("Unparseable audit timestamp '{}', using ingestion time", s);
                Utc::now()
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::parse_timestamp;

    #[test]
    fn rfc3339_timestamps_are_honored() {
        let parsed = parse_timestamp(Some("2026-03-01T12:30:00Z"));
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 0).unwrap());
    }

    #[test]
    fn garbage_timestamps_fall_back_to_now() {
        let before = Utc::now();
        let parsed = parse_timestamp(Some("yesterday-ish"));
        assert!(parsed >= before);
    }

    #[test]
    fn missing_timestamps_fall_back_to_now() {
        let before = Utc::now();
        let parsed = parse_timestamp(None);
        assert!(parsed >= before);
    }
}
