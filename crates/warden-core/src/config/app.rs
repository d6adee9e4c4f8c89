//! HTTP server and CORS settings.

use serde::{Deserialize, Serialize};

/// Bind address, shutdown grace, and CORS policy for the HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub shutdown_grace_seconds: u64,
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            shutdown_grace_seconds: 30,
            cors: CorsConfig::default(),
        }
    }
}

/// Cross-origin policy applied to every route.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Origins allowed to call the API. `["*"]` opens the API to any
    /// origin and is only suitable for development.
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
        }
    }
}
