//! Prediction service answers.

mod outcome;
mod response;

pub use outcome::EstimateOutcome;
pub use response::{PredictionResponse, is_truthy, render_value};
