//! Domain layer for house-estimator
//!
//! This crate contains the value objects and rules of a submission cycle.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Submission cycle
//!
//! One submit-to-outcome interval: the form is captured into an
//! [`EstimateRequest`], posted once, and the answer is classified as an
//! estimate, an application error, or (outside this crate) a transport error.
//!
//! ## Display rules
//!
//! How each outcome is presented: texts, font sizes, error color and the
//! entrance animation of a revealed estimate.

pub mod config;
pub mod core;
pub mod display;
pub mod prediction;
pub mod property;
pub mod submission;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use display::{
    BUSY_LABEL, CubicBezier, EntranceAnimation, FontSize, Keyframe, ScrollBlock, ScrollOptions,
    TRANSPORT_FAILURE_TEXT, TextColor,
};
pub use prediction::{EstimateOutcome, PredictionResponse};
pub use property::{Currency, EstimateRequest, FormSnapshot, Location, fields};
pub use submission::SubmissionPhase;
