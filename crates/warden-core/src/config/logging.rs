//! Logging settings.

use serde::{Deserialize, Serialize};

/// Log verbosity and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level written: `"trace"` through `"error"`.
    pub level: String,
    /// `"json"` for machine-readable output, `"pretty"` for terminals.
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "json".to_string(),
        }
    }
}
