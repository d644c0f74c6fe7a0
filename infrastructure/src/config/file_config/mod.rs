//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod display;
mod endpoint;
mod form;
mod output;

pub use display::FileDisplayConfig;
pub use endpoint::{DEFAULT_BASE_URL, FileEndpointConfig};
pub use form::FileFormConfig;
pub use output::FileOutputConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("endpoint.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("endpoint.base_url must start with http:// or https:// (got {0})")]
    UnsupportedScheme(String),

    #[error("endpoint.timeout_seconds cannot be 0")]
    InvalidTimeout,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Estimation service settings
    pub endpoint: FileEndpointConfig,
    /// Submission cycle presentation settings
    pub display: FileDisplayConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Interactive form defaults
    pub form: FileFormConfig,
}

impl FileConfig {
    /// Validate the configuration, returning every detected issue.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        let base_url = self.endpoint.base_url.trim();
        if base_url.is_empty() {
            issues.push(ConfigValidationError::EmptyBaseUrl);
        } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            issues.push(ConfigValidationError::UnsupportedScheme(base_url.to_string()));
        }

        if self.endpoint.timeout_seconds == Some(0) {
            issues.push(ConfigValidationError::InvalidTimeout);
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estimator_domain::{Currency, Location, OutputFormat};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[endpoint]
base_url = "http://10.0.0.2:8080"
timeout_seconds = 15

[display]
reveal_delay_ms = 250

[output]
format = "json"
color = false

[form]
location = "Rural"
currency = "INR"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.endpoint.base_url, "http://10.0.0.2:8080");
        assert_eq!(config.endpoint.timeout_seconds, Some(15));
        assert_eq!(config.display.reveal_delay_ms, 250);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert_eq!(config.form.location, Location::Rural);
        assert_eq!(config.form.currency, Currency::Inr);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[display]
busy_label = "Hold on..."
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.busy_label, "Hold on...");
        // Defaults should apply
        assert_eq!(config.display.reveal_delay_ms, 800);
        assert_eq!(config.endpoint.base_url, DEFAULT_BASE_URL);
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let mut config = FileConfig::default();
        config.endpoint.base_url = "ftp://estimates".to_string();
        config.endpoint.timeout_seconds = Some(0);

        assert_eq!(
            config.validate(),
            vec![
                ConfigValidationError::UnsupportedScheme("ftp://estimates".to_string()),
                ConfigValidationError::InvalidTimeout,
            ]
        );
    }

    #[test]
    fn test_validate_empty_base_url() {
        let mut config = FileConfig::default();
        config.endpoint.base_url = "  ".to_string();
        assert_eq!(config.validate(), vec![ConfigValidationError::EmptyBaseUrl]);
    }
}
