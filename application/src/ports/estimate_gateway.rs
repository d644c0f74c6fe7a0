//! Estimate gateway port
//!
//! Defines the interface for reaching the remote estimation service.

use async_trait::async_trait;
use estimator_domain::{EstimateRequest, PredictionResponse};
use thiserror::Error;

/// Errors that can occur while exchanging a request with the service
///
/// Every variant is a transport error: the exchange did not produce a
/// decodable answer. Errors the service itself reports travel inside
/// [`PredictionResponse`].
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timeout")]
    Timeout,
}

/// Gateway to the estimation service
///
/// This port defines how the application layer reaches the `/predict`
/// endpoint. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait EstimateGateway: Send + Sync {
    /// Send one request and decode the answer, whatever its HTTP status
    async fn predict(&self, request: &EstimateRequest) -> Result<PredictionResponse, GatewayError>;
}
