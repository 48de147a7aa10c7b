//! Application state and core logic

use crate::config::TuiConfig;
use crate::estimator::{Estimator, HttpEstimator};
use crate::state::{AppState, PredictionController};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Form store and request lifecycle
    pub controller: PredictionController,
    /// Endpoint shown in the header
    pub service_url: String,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App talking to the configured estimation service
    pub fn new(config: &TuiConfig) -> Self {
        let service_url = config.service_url();
        let estimator = Arc::new(HttpEstimator::new(service_url.clone()));
        tracing::info!(%service_url, timeout = ?config.request_timeout(), "Starting car price TUI");
        Self::with_estimator(estimator, config.request_timeout(), service_url)
    }

    pub fn with_estimator(
        estimator: Arc<dyn Estimator>,
        timeout: Duration,
        service_url: String,
    ) -> Self {
        Self {
            state: AppState::default(),
            controller: PredictionController::with_timeout(estimator, timeout),
            service_url,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Apply a finished request, if any. Called once per event-loop iteration.
    pub fn tick(&mut self) {
        if let Some(completion) = self.controller.poll_completion() {
            self.state.record_completion(&completion);
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let on_buttons_row = self.state.cursor.is_buttons_row_active();
        let active = self.state.cursor.active_attribute();

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.state.register_ctrl_c(Instant::now()) {
                    self.quit = true;
                }
            }
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.cursor.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.cursor.prev_field(),
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Char('r') if key.modifiers.contains(crate::platform::SHORTCUT_MODIFIER) => {
                self.reset_form()
            }
            // Button order: 0=Predict, 1=Reset
            KeyCode::Left if on_buttons_row => self.state.cursor.prev_button(),
            KeyCode::Right if on_buttons_row => self.state.cursor.next_button(),
            KeyCode::Enter if on_buttons_row => match self.state.cursor.selected_button {
                0 => self.submit(),
                1 => self.reset_form(),
                _ => {}
            },
            KeyCode::Enter => self.state.cursor.next_field(),
            // Form field input (only when not on the buttons row)
            KeyCode::Left | KeyCode::Right => {
                if let Some(name) = active {
                    let forward = key.code == KeyCode::Right;
                    self.controller.form_mut().cycle_choice(name, forward);
                }
            }
            KeyCode::Char(c) => {
                if let Some(name) = active {
                    self.controller.form_mut().push_char(name, c);
                }
            }
            KeyCode::Backspace => {
                if let Some(name) = active {
                    self.controller.form_mut().pop_char(name);
                }
            }
            _ => {}
        }
    }

    fn submit(&mut self) {
        if self.controller.submit() {
            self.state.status_message = Some("Requesting estimate...".to_string());
        }
    }

    fn reset_form(&mut self) {
        self.controller.form_mut().clear();
        self.state.cursor.set_active_field(0);
        self.state.status_message = Some("Form cleared".to_string());
    }
}
