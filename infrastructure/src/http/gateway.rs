//! HTTP adapter for the estimation service

use async_trait::async_trait;
use estimator_application::{EstimateGateway, GatewayError};
use estimator_domain::{EstimateRequest, PredictionResponse};
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::debug;

/// Path of the prediction endpoint, relative to the service base URL
pub const PREDICT_PATH: &str = "/predict";

/// Gateway posting estimate requests to `{base_url}/predict`
///
/// The HTTP status is not inspected: the service answers application errors
/// with 4xx/5xx and an `error` body, which must reach the use case as a
/// decoded response. Only a failed exchange or a non-JSON body is an error.
#[derive(Debug, Clone)]
pub struct HttpEstimateGateway {
    client: reqwest::Client,
    predict_url: String,
}

impl HttpEstimateGateway {
    /// Gateway without a request timeout
    pub fn new(base_url: &str) -> Result<Self, GatewayError> {
        Self::with_timeout(base_url, None)
    }

    /// Gateway whose requests give up after `timeout`, when set
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        Ok(Self {
            client,
            predict_url: predict_url(base_url),
        })
    }

    pub fn predict_url(&self) -> &str {
        &self.predict_url
    }
}

#[async_trait]
impl EstimateGateway for HttpEstimateGateway {
    async fn predict(&self, request: &EstimateRequest) -> Result<PredictionResponse, GatewayError> {
        let resp = self
            .client
            .post(&self.predict_url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| GatewayError::RequestFailed(format!("Failed to read response body: {}", e)))?;
        debug!("POST {} -> {}", self.predict_url, status);

        PredictionResponse::parse(&body).map_err(|e| {
            GatewayError::MalformedResponse(format!(
                "Failed to parse response JSON (HTTP {}): {}",
                status.as_u16(),
                e
            ))
        })
    }
}

fn predict_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), PREDICT_PATH)
}

fn map_send_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}
