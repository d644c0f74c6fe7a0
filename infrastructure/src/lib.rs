//! Infrastructure layer for house-estimator
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileDisplayConfig, FileEndpointConfig,
    FileFormConfig, FileOutputConfig,
};
pub use http::HttpEstimateGateway;
