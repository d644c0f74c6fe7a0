//! HTTP adapters

pub mod gateway;

pub use gateway::{HttpEstimateGateway, PREDICT_PATH};
