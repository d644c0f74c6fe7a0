//! Submission cycle state machine

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Phase of a submission cycle
///
/// ```text
/// Idle ──► Submitting ──┬──► Succeeded ──► Idle
///                       └──► Failed ─────► Idle
/// ```
///
/// `Succeeded` covers both a rendered estimate and an application error
/// reported by the service; `Failed` is reserved for transport failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
    /// Button enabled with its original label, result area hidden
    #[default]
    Idle,
    /// Request in flight, loading indicator showing
    Submitting,
    /// Service answered (estimate or application error)
    Succeeded,
    /// The exchange could not be completed or parsed
    Failed,
}

impl SubmissionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionPhase::Idle => "idle",
            SubmissionPhase::Submitting => "submitting",
            SubmissionPhase::Succeeded => "succeeded",
            SubmissionPhase::Failed => "failed",
        }
    }

    /// Whether `next` is a legal successor of this phase
    pub fn can_transition_to(&self, next: SubmissionPhase) -> bool {
        use SubmissionPhase::*;
        matches!(
            (*self, next),
            (Idle, Submitting)
                | (Submitting, Succeeded)
                | (Submitting, Failed)
                | (Succeeded, Idle)
                | (Failed, Idle)
        )
    }

    /// Move to `next`, rejecting transitions the cycle does not allow
    pub fn transition(self, next: SubmissionPhase) -> Result<SubmissionPhase, DomainError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(DomainError::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }
}

impl fmt::Display for SubmissionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(SubmissionPhase::default(), SubmissionPhase::Idle);
    }

    #[test]
    fn test_full_success_cycle() {
        let phase = SubmissionPhase::Idle
            .transition(SubmissionPhase::Submitting)
            .and_then(|p| p.transition(SubmissionPhase::Succeeded))
            .and_then(|p| p.transition(SubmissionPhase::Idle))
            .unwrap();
        assert_eq!(phase, SubmissionPhase::Idle);
    }

    #[test]
    fn test_full_failure_cycle() {
        let phase = SubmissionPhase::Idle
            .transition(SubmissionPhase::Submitting)
            .and_then(|p| p.transition(SubmissionPhase::Failed))
            .and_then(|p| p.transition(SubmissionPhase::Idle))
            .unwrap();
        assert_eq!(phase, SubmissionPhase::Idle);
    }

    #[test]
    fn test_cannot_skip_submitting() {
        let err = SubmissionPhase::Idle
            .transition(SubmissionPhase::Succeeded)
            .unwrap_err();
        assert!(err.is_transition_error());
    }

    #[test]
    fn test_terminal_cannot_resubmit_directly() {
        assert!(!SubmissionPhase::Succeeded.can_transition_to(SubmissionPhase::Submitting));
        assert!(!SubmissionPhase::Failed.can_transition_to(SubmissionPhase::Succeeded));
    }

    #[test]
    fn test_serialize_snake_case() {
        let json = serde_json::to_string(&SubmissionPhase::Submitting).unwrap();
        assert_eq!(json, "\"submitting\"");
    }
}
