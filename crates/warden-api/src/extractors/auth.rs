//! `AuthUser` extractor — pulls the bearer token from the Authorization
//! header, validates, and injects the resolved principal.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use warden_auth::validator::ValidatedUser;
use warden_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated principal available in handlers.
///
/// Unlike the bare validator, the extractor also rejects disabled
/// principals: a handler that sees an `AuthUser` is talking to a live
/// account. The validation endpoint reads the header itself precisely
/// because it must not apply that last gate.
#[derive(Debug, Clone)]
pub struct AuthUser(pub ValidatedUser);

impl std::ops::Deref for AuthUser {
    type Target = ValidatedUser;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(AppError::malformed_header)?;

        let validated = state.validator.validate_header(header).await?;

        if !validated.enabled {
            return Err(ApiError(AppError::account_disabled()));
        }

        Ok(AuthUser(validated))
    }
}
