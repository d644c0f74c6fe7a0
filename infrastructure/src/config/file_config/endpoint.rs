//! Endpoint configuration from TOML (`[endpoint]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Raw endpoint configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEndpointConfig {
    /// Base URL of the estimation service; `/predict` is appended
    pub base_url: String,
    /// Request timeout in seconds (no timeout when unset)
    pub timeout_seconds: Option<u64>,
}

impl Default for FileEndpointConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
        }
    }
}

impl FileEndpointConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}
