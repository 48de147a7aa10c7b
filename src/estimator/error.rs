//! Failures of a single estimation request

use thiserror::Error;

/// Why a request to the estimation service did not yield a price
#[derive(Debug, Error)]
pub enum EstimateError {
    /// The service could not be reached or the connection broke mid-request
    #[error("Estimation service unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("Estimation service returned {status}: {message}")]
    Status { status: u16, message: String },

    /// No answer arrived within the configured timeout
    #[error("Estimation request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// The body did not carry a numeric `predicted_price`
    #[error("Malformed estimation response: {reason}")]
    MalformedResponse { reason: String },

    /// The request task stopped before producing an answer
    #[error("Estimation request aborted: {reason}")]
    Aborted { reason: String },
}
