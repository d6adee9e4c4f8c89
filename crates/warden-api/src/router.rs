//! HTTP surface of the Warden API.
//!
//! Everything lives under `/api`; handlers receive [`AppState`] through
//! Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{admin, audit, auth, health};
use crate::middleware::logging::request_logging;
use crate::state::AppState;

/// Assemble the full router: routes, CORS, tracing, and access logging.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/validate-token", post(auth::validate_token))
        .route("/admin/users", get(admin::users::list_users))
        .route("/admin/register", post(admin::users::register))
        .route("/admin/users/{id}/status", put(admin::users::change_status))
        .route("/admin/audit", get(admin::audit::search_audit))
        .route("/audit/log", post(audit::ingest))
        .route("/health", get(health::health));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state))
        .layer(axum_middleware::from_fn(request_logging))
        .with_state(state)
}

/// CORS policy from configuration. A literal `"*"` origin opens the API
/// to any caller; otherwise only the listed origins are admitted.
fn cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::HeaderValue;

    let cors = &state.config.server.cors;
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if cors.allowed_origins.iter().any(|o| o == "*") {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = cors
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer.allow_origin(origins)
    }
}
