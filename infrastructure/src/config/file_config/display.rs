//! Display configuration from TOML (`[display]` section)

use estimator_application::{BehaviorConfig, DEFAULT_REVEAL_DELAY, InFlightPolicy};
use estimator_domain::BUSY_LABEL;
use serde::{Deserialize, Serialize};

/// Raw display configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDisplayConfig {
    /// Pause before revealing an outcome, in milliseconds
    pub reveal_delay_ms: u64,
    /// Submit button label while a request is in flight
    pub busy_label: String,
    /// Refuse a submit while another one is in flight
    pub reject_concurrent: bool,
}

impl Default for FileDisplayConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: DEFAULT_REVEAL_DELAY.as_millis() as u64,
            busy_label: BUSY_LABEL.to_string(),
            reject_concurrent: false,
        }
    }
}

impl FileDisplayConfig {
    /// Convert into the application's behavior configuration
    pub fn to_behavior_config(&self) -> BehaviorConfig {
        let policy = if self.reject_concurrent {
            InFlightPolicy::Reject
        } else {
            InFlightPolicy::Allow
        };
        BehaviorConfig::default()
            .with_reveal_delay_ms(self.reveal_delay_ms)
            .with_busy_label(self.busy_label.clone())
            .with_in_flight_policy(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_defaults_match_application() {
        let behavior = FileDisplayConfig::default().to_behavior_config();
        let expected = BehaviorConfig::default();
        assert_eq!(behavior.reveal_delay, expected.reveal_delay);
        assert_eq!(behavior.busy_label, expected.busy_label);
        assert_eq!(behavior.in_flight, expected.in_flight);
    }

    #[test]
    fn test_display_deserialize() {
        let toml_str = r#"
[display]
reveal_delay_ms = 0
busy_label = "Estimating..."
reject_concurrent = true
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        let behavior = config.display.to_behavior_config();
        assert_eq!(behavior.reveal_delay, Duration::ZERO);
        assert_eq!(behavior.busy_label, "Estimating...");
        assert_eq!(behavior.in_flight, InFlightPolicy::Reject);
    }
}
