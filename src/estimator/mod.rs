//! Estimation service client module for HTTP communication

mod client;
mod error;
mod traits;

pub use client::{HttpEstimator, DEFAULT_ENDPOINT};
pub use error::EstimateError;
pub use traits::Estimator;

#[cfg(test)]
pub use traits::MockEstimator;
