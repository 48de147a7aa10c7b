//! Application state definitions

use super::forms::FormCursor;
use super::prediction::Completion;
use std::time::{Duration, Instant};

/// Window in which a second Ctrl+C quits
pub const DOUBLE_TAP_WINDOW: Duration = Duration::from_secs(1);

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Form navigation
    pub cursor: FormCursor,

    // Feedback shown in the status bar
    pub status_message: Option<String>,

    // Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl AppState {
    /// Record a Ctrl+C press. Returns true if it completes a double tap.
    pub fn register_ctrl_c(&mut self, now: Instant) -> bool {
        let is_double = self
            .last_ctrl_c
            .is_some_and(|prev| now.duration_since(prev) <= DOUBLE_TAP_WINDOW);
        if is_double {
            self.last_ctrl_c = None;
        } else {
            self.last_ctrl_c = Some(now);
            self.status_message = Some("Press Ctrl+C again to quit".to_string());
        }
        is_double
    }

    /// Update the status message after a request resolves
    pub fn record_completion(&mut self, completion: &Completion) {
        self.status_message = Some(match completion {
            Completion::Estimated(price) => format!("Estimate received: ${price}"),
            Completion::Failed(_) => "Prediction failed".to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.cursor, FormCursor::new());
        assert!(state.status_message.is_none());
        assert!(state.last_ctrl_c.is_none());
    }

    #[test]
    fn test_single_ctrl_c_does_not_quit() {
        let mut state = AppState::default();
        assert!(!state.register_ctrl_c(Instant::now()));
        assert!(state.last_ctrl_c.is_some());
        assert!(state.status_message.is_some());
    }

    #[test]
    fn test_double_ctrl_c_quits() {
        let mut state = AppState::default();
        let first = Instant::now();
        state.register_ctrl_c(first);
        assert!(state.register_ctrl_c(first + Duration::from_millis(300)));
    }

    #[test]
    fn test_slow_second_ctrl_c_restarts_window() {
        let mut state = AppState::default();
        let first = Instant::now();
        state.register_ctrl_c(first);
        assert!(!state.register_ctrl_c(first + Duration::from_secs(3)));
    }

    #[test]
    fn test_record_completion_messages() {
        let mut state = AppState::default();
        state.record_completion(&Completion::Estimated(15000.5));
        assert_eq!(state.status_message.as_deref(), Some("Estimate received: $15000.5"));

        state.record_completion(&Completion::Failed("boom".to_string()));
        assert_eq!(state.status_message.as_deref(), Some("Prediction failed"));
    }
}
