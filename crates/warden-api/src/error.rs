//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use warden_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// HTTP-boundary wrapper around [`AppError`].
///
/// `AppError` lives in `warden-core`, which knows nothing about axum;
/// this newtype carries it across the response boundary. Handlers return
/// `Result<_, ApiError>` and let `?` convert.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// Status mapping for each error kind.
///
/// Credential, token, and refresh failures all read as 401 so probing the
/// API cannot tell a bad password from a revoked session. Infrastructure
/// failures are 503, distinct from anything credential-shaped.
fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidCredentials
        | ErrorKind::InvalidRefreshToken
        | ErrorKind::RefreshTokenExpired
        | ErrorKind::InvalidSignature
        | ErrorKind::TokenExpired
        | ErrorKind::MalformedToken
        | ErrorKind::MalformedHeader
        | ErrorKind::PrincipalNotFound
        | ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::AccountDisabled | ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::DuplicateIdentifier => StatusCode::CONFLICT,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Database => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::Configuration | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(err.kind);

        if status.is_server_error() {
            tracing::error!(kind = %err.kind, error = %err.message, "Request failed");
        }

        let body = ApiErrorResponse {
            error: err.kind.to_string(),
            message: err.message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use warden_core::error::{AppError, ErrorKind};

    use super::{ApiError, status_for};

    #[test]
    fn token_failures_are_unauthorized() {
        for kind in [
            ErrorKind::InvalidCredentials,
            ErrorKind::InvalidRefreshToken,
            ErrorKind::RefreshTokenExpired,
            ErrorKind::InvalidSignature,
            ErrorKind::TokenExpired,
            ErrorKind::MalformedToken,
            ErrorKind::MalformedHeader,
            ErrorKind::PrincipalNotFound,
        ] {
            assert_eq!(status_for(kind), StatusCode::UNAUTHORIZED, "{kind}");
        }
    }

    #[test]
    fn disabled_account_is_forbidden_not_unauthorized() {
        assert_eq!(status_for(ErrorKind::AccountDisabled), StatusCode::FORBIDDEN);
    }

    #[test]
    fn duplicate_identifier_is_conflict() {
        assert_eq!(status_for(ErrorKind::DuplicateIdentifier), StatusCode::CONFLICT);
    }

    #[test]
    fn database_failure_is_service_unavailable() {
        assert_eq!(status_for(ErrorKind::Database), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn response_body_carries_the_error_code() {
        let response = ApiError(AppError::invalid_signature()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
