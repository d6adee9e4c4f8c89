//! JWT claims structure carried by access tokens.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use warden_entity::user::UserRole;

/// Claims payload embedded in every minted token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the principal's login identifier.
    pub sub: String,
    /// Role at the time of issuance.
    pub role: UserRole,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Token type: "access" or "refresh".
    pub token_type: TokenType,
}

/// Distinguishes access tokens from refresh-shaped ones.
///
/// Production refresh tokens are opaque and never minted as JWTs; the
/// variant exists so the codec can tag and reject tokens that claim to
/// be anything other than an access token.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Access token presented on API requests.
    Access,
    /// Refresh-shaped token; never accepted where an access token is
    /// expected.
    Refresh,
}

impl Claims {
    /// Whether the token has expired. `now == exp` counts as expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
