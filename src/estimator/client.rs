//! HTTP client for the price estimation service
//!
//! Posts the attribute set as JSON and reads `predicted_price` back.

use super::{EstimateError, Estimator};
use crate::state::AttributeSet;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Default estimation endpoint
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/predict";

/// Successful response body
#[derive(Debug, Deserialize)]
struct PredictionResponse {
    predicted_price: f64,
}

/// Error body the service sends alongside 4xx/5xx statuses
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Estimator backed by the remote HTTP service
pub struct HttpEstimator {
    client: Client,
    endpoint: String,
}

impl HttpEstimator {
    /// Create a client for `endpoint`
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl Estimator for HttpEstimator {
    async fn estimate(&self, attributes: &AttributeSet) -> Result<f64, EstimateError> {
        tracing::debug!(endpoint = %self.endpoint, ?attributes, "Requesting price estimate");

        let response = self
            .client
            .post(&self.endpoint)
            .json(attributes)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = match serde_json::from_slice::<ErrorResponse>(&body) {
                Ok(err) => err.error,
                Err(_) => String::from_utf8_lossy(&body).trim().to_string(),
            };
            return Err(EstimateError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: PredictionResponse =
            serde_json::from_slice(&body).map_err(|e| EstimateError::MalformedResponse {
                reason: e.to_string(),
            })?;

        Ok(parsed.predicted_price)
    }
}
