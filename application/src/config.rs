//! Application-level configuration.
//!
//! This module provides configuration types that control how the submission
//! use case behaves, such as the reveal delay and concurrent-submit policy.

use estimator_domain::BUSY_LABEL;
use std::time::Duration;

/// Default pause between receiving a response and revealing it
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(800);

/// What to do when a submit arrives while another one is still in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InFlightPolicy {
    /// Let overlapping submissions run independently
    #[default]
    Allow,
    /// Refuse a submit while another is in flight
    Reject,
}

/// Application behavior configuration.
///
/// Controls runtime behavior of the submission cycle.
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    /// Pause applied after a response arrives, before the outcome is shown.
    pub reveal_delay: Duration,
    /// Submit button label while a request is in flight.
    pub busy_label: String,
    /// Handling of overlapping submissions.
    pub in_flight: InFlightPolicy,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            reveal_delay: DEFAULT_REVEAL_DELAY,
            busy_label: BUSY_LABEL.to_string(),
            in_flight: InFlightPolicy::Allow,
        }
    }
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig with the reveal delay given in milliseconds.
    pub fn with_reveal_delay_ms(mut self, millis: u64) -> Self {
        self.reveal_delay = Duration::from_millis(millis);
        self
    }

    /// Reveal outcomes as soon as they arrive.
    pub fn without_reveal_delay(mut self) -> Self {
        self.reveal_delay = Duration::ZERO;
        self
    }

    pub fn with_busy_label(mut self, label: impl Into<String>) -> Self {
        self.busy_label = label.into();
        self
    }

    pub fn with_in_flight_policy(mut self, policy: InFlightPolicy) -> Self {
        self.in_flight = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BehaviorConfig::default();
        assert_eq!(config.reveal_delay, Duration::from_millis(800));
        assert_eq!(config.busy_label, "Calculating...");
        assert_eq!(config.in_flight, InFlightPolicy::Allow);
    }

    #[test]
    fn test_builders() {
        let config = BehaviorConfig::default()
            .with_reveal_delay_ms(10)
            .with_busy_label("Working")
            .with_in_flight_policy(InFlightPolicy::Reject);
        assert_eq!(config.reveal_delay, Duration::from_millis(10));
        assert_eq!(config.busy_label, "Working");
        assert_eq!(config.in_flight, InFlightPolicy::Reject);
        assert!(config.without_reveal_delay().reveal_delay.is_zero());
    }
}
