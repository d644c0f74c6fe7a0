//! Domain error types

use crate::submission::SubmissionPhase;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid submission transition: {from} -> {to}")]
    InvalidTransition {
        from: SubmissionPhase,
        to: SubmissionPhase,
    },

    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

impl DomainError {
    /// Check if this error comes from the submission state machine
    pub fn is_transition_error(&self) -> bool {
        matches!(self, DomainError::InvalidTransition { .. })
    }
}
