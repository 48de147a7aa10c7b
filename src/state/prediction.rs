//! Prediction request lifecycle
//!
//! [`PredictionController`] owns the form store, guards the single in-flight
//! request and keeps the latest price plus the history of every successful
//! estimate. Requests run on a tokio task; their outcome comes back over a
//! channel and is applied by the owner through [`PredictionController::poll_completion`]
//! or [`PredictionController::wait_for_completion`], so state is only ever
//! mutated on the owning context.

use super::forms::FormStateStore;
use crate::estimator::{EstimateError, Estimator};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Whether a submission is outstanding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
}

/// One successful estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryEntry {
    /// 1-based position in the history
    pub sequence_id: u64,
    pub price: f64,
}

/// What happened to the request that just resolved
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Estimated(f64),
    Failed(String),
}

type Outcome = Result<f64, EstimateError>;

/// Drives submissions against an [`Estimator`]
pub struct PredictionController {
    form: FormStateStore,
    estimator: Arc<dyn Estimator>,
    timeout: Duration,
    request_state: RequestState,
    prediction: Option<f64>,
    history: Vec<HistoryEntry>,
    last_error: Option<String>,
    completion_tx: mpsc::UnboundedSender<Outcome>,
    completion_rx: mpsc::UnboundedReceiver<Outcome>,
}

impl PredictionController {
    #[cfg(test)]
    pub fn new(estimator: Arc<dyn Estimator>) -> Self {
        Self::with_timeout(estimator, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(estimator: Arc<dyn Estimator>, timeout: Duration) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        Self {
            form: FormStateStore::new(),
            estimator,
            timeout,
            request_state: RequestState::Idle,
            prediction: None,
            history: Vec::new(),
            last_error: None,
            completion_tx,
            completion_rx,
        }
    }

    pub fn form(&self) -> &FormStateStore {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormStateStore {
        &mut self.form
    }

    /// Start a prediction for the current form values.
    ///
    /// Returns `false` without doing anything if a request is already
    /// pending. Must be called from within a tokio runtime.
    pub fn submit(&mut self) -> bool {
        if self.request_state == RequestState::Pending {
            tracing::debug!("Prediction already pending, ignoring submit");
            return false;
        }

        // Pending is set before the task exists so a second submit cannot race it
        self.request_state = RequestState::Pending;
        let snapshot = self.form.snapshot();
        let estimator = Arc::clone(&self.estimator);
        let timeout = self.timeout;
        let tx = self.completion_tx.clone();

        tracing::info!(missing = ?self.form.missing_fields(), "Submitting prediction request");

        let request = tokio::spawn(async move {
            match tokio::time::timeout(timeout, estimator.estimate(&snapshot)).await {
                Ok(result) => result,
                Err(_) => Err(EstimateError::Timeout {
                    duration_ms: timeout.as_millis() as u64,
                }),
            }
        });

        // Every request reports back, even when the estimator panics
        tokio::spawn(async move {
            let outcome = match request.await {
                Ok(outcome) => outcome,
                Err(err) => Err(EstimateError::Aborted {
                    reason: err.to_string(),
                }),
            };
            // Receiver lives as long as the controller; a send error only means it was dropped
            let _ = tx.send(outcome);
        });

        true
    }

    /// Apply a finished request, if any, without blocking
    pub fn poll_completion(&mut self) -> Option<Completion> {
        if self.request_state != RequestState::Pending {
            return None;
        }
        let outcome = self.completion_rx.try_recv().ok()?;
        Some(self.apply(outcome))
    }

    /// Wait for the pending request to finish and apply it.
    /// Returns `None` immediately when nothing is pending.
    pub async fn wait_for_completion(&mut self) -> Option<Completion> {
        if self.request_state != RequestState::Pending {
            return None;
        }
        let outcome = self.completion_rx.recv().await?;
        Some(self.apply(outcome))
    }

    /// Submit and wait for the result in one step
    #[cfg(test)]
    pub async fn submit_and_wait(&mut self) -> Option<Completion> {
        if !self.submit() {
            return None;
        }
        self.wait_for_completion().await
    }

    fn apply(&mut self, outcome: Outcome) -> Completion {
        self.request_state = RequestState::Idle;
        match outcome {
            Ok(price) => {
                let sequence_id = self.history.len() as u64 + 1;
                self.prediction = Some(price);
                self.history.push(HistoryEntry { sequence_id, price });
                self.last_error = None;
                tracing::info!(sequence_id, price, "Prediction received");
                Completion::Estimated(price)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Prediction request failed");
                let message = err.to_string();
                self.last_error = Some(message.clone());
                Completion::Failed(message)
            }
        }
    }

    pub fn request_state(&self) -> RequestState {
        self.request_state
    }

    pub fn is_pending(&self) -> bool {
        self.request_state == RequestState::Pending
    }

    /// Most recent successful price
    pub fn prediction_result(&self) -> Option<f64> {
        self.prediction
    }

    /// Copy of the estimate history, oldest first
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history.clone()
    }

    /// Message of the most recent failure, cleared by the next success
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
