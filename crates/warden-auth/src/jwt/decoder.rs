//! JWT verification and claim extraction.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use warden_core::config::auth::AuthConfig;
use warden_core::error::AppError;

use super::claims::Claims;

/// Verifies token signatures and extracts claims.
///
/// Verification is purely local: signature plus expiry, nothing else.
/// The error taxonomy is strict so callers can distinguish a forged
/// token from a stale one:
///
/// - bad signature → `InvalidSignature` (checked before expiry, so a
///   tampered expired token still reads as forged)
/// - `now >= exp` → `TokenExpired`
/// - undecodable structure → `MalformedToken`
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // No leeway: a token minted with ttl = 0 must already be expired.
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and verifies a token string.
    pub fn parse(&self, token: &str) -> Result<Claims, AppError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::token_expired(),
                jsonwebtoken::errors::ErrorKind::InvalidSignature => AppError::invalid_signature(),
                _ => AppError::malformed_token("Token could not be decoded"),
            }
        })?;

        // The library treats exp == now as still valid; the contract
        // here is that a token expires the second it reaches exp.
        let claims = data.claims;
        if claims.is_expired() {
            return Err(AppError::token_expired());
        }

        Ok(claims)
    }
}
