//! Trait abstraction for the estimation service to enable mocking in tests

use super::EstimateError;
use crate::state::AttributeSet;
use async_trait::async_trait;

/// Maps a complete attribute set to a price estimate
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Estimator: Send + Sync {
    /// Request a single price estimate for `attributes`
    async fn estimate(&self, attributes: &AttributeSet) -> Result<f64, EstimateError>;
}
