//! Application layer for house-estimator
//!
//! This crate contains the submission use case, its ports, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{BehaviorConfig, DEFAULT_REVEAL_DELAY, InFlightPolicy};
pub use ports::{
    estimate_gateway::{EstimateGateway, GatewayError},
    headless_view::{DisplayState, HeadlessView, ViewEvent},
    view::{FormSource, LoadingIndicator, PriceDisplay, ResultArea, SubmitButton, ViewBindings},
};
pub use use_cases::submit_estimate::{SubmissionReport, SubmitError, SubmitEstimateUseCase};
