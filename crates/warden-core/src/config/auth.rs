//! Token lifecycle settings.

use serde::{Deserialize, Serialize};

/// Signing material and lifetimes for the token subsystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HMAC-SHA256 signing secret for access tokens. Override this in
    /// every real deployment.
    pub jwt_secret: String,
    /// Access token lifetime, in minutes.
    pub access_ttl_minutes: u64,
    /// Refresh token lifetime, in hours.
    pub refresh_ttl_hours: u64,
    /// How often the background sweeper purges expired sessions, in
    /// seconds.
    pub sweep_interval_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "CHANGE_ME_IN_PRODUCTION".to_string(),
            access_ttl_minutes: 1440,
            refresh_ttl_hours: 168,
            sweep_interval_seconds: 3600,
        }
    }
}
