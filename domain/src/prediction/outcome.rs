//! Estimate outcome value object

use serde::{Deserialize, Serialize};

/// What the service answered for one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EstimateOutcome {
    /// A predicted value, already formatted by the service
    Estimate { text: String },
    /// The service could not produce a prediction (application error)
    Rejected { message: String },
}

impl EstimateOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, EstimateOutcome::Rejected { .. })
    }

    /// Text placed in the price display
    pub fn display_text(&self) -> String {
        match self {
            EstimateOutcome::Estimate { text } => text.clone(),
            EstimateOutcome::Rejected { message } => format!("Error: {}", message),
        }
    }
}
