//! JWT creation with configurable signing key and TTL.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use warden_core::config::auth::AuthConfig;
use warden_core::error::AppError;
use warden_entity::user::User;

use super::claims::{Claims, TokenType};

/// Creates signed access tokens.
///
/// The signing key is injected at construction; there is no ambient key
/// state anywhere in the process.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    access_ttl_minutes: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("access_ttl_minutes", &self.access_ttl_minutes)
            .finish()
    }
}

impl JwtEncoder {
    /// Derives the HMAC signing key from `jwt_secret`.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            access_ttl_minutes: config.access_ttl_minutes as i64,
        }
    }

    /// Mints an access token for the principal using the configured TTL.
    pub fn mint_access(&self, user: &User) -> Result<(String, DateTime<Utc>), AppError> {
        self.mint(user, TokenType::Access, Duration::minutes(self.access_ttl_minutes))
    }

    /// Mints a token with an explicit type and TTL.
    ///
    /// `iat = now`, `exp = now + ttl`. A zero TTL produces a token that
    /// is already expired at parse time.
    pub fn mint(
        &self,
        user: &User,
        token_type: TokenType,
        ttl: Duration,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        let now = Utc::now();
        let expires_at = now + ttl;

        let claims = Claims {
            sub: user.email.clone(),
            role: user.role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            token_type,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Token signing failed: {e}")))?;

        Ok((token, expires_at))
    }
}
