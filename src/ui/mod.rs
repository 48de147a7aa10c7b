//! UI module for rendering the TUI

mod chart;
mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = layout::create_layout(frame.area());

    layout::draw_header(frame, layout.header, app);
    forms::draw_prediction_form(frame, layout.form, app);
    forms::draw_action_panel(frame, layout.actions, app);
    chart::draw_history(frame, layout.chart, &app.controller.history());
    layout::draw_status_bar(frame, layout.status, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::MockEstimator;
    use crate::state::AttributeName;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;
    use std::time::Duration;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_draw_renders_form_and_empty_history() {
        let mut app = App::with_estimator(
            Arc::new(MockEstimator::new()),
            Duration::from_secs(1),
            "http://127.0.0.1:5000/predict".to_string(),
        );
        app.controller.form_mut().set_field(AttributeName::Model, "toyota");

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Car Price Prediction"));
        assert!(text.contains("toyota"));
        assert!(text.contains("Predict Price"));
        assert!(text.contains("No estimate yet"));
        assert!(text.contains("Predictions will appear here."));
    }

    #[test]
    fn test_draw_survives_tiny_terminal() {
        let app = App::with_estimator(
            Arc::new(MockEstimator::new()),
            Duration::from_secs(1),
            String::new(),
        );
        let mut terminal = Terminal::new(TestBackend::new(10, 5)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
    }

    #[test]
    fn test_draw_survives_terminals_shorter_than_layout() {
        let app = App::with_estimator(
            Arc::new(MockEstimator::new()),
            Duration::from_secs(1),
            String::new(),
        );
        for height in [1, 2, 18, 24] {
            let mut terminal = Terminal::new(TestBackend::new(80, height)).unwrap();
            terminal.draw(|frame| draw(frame, &app)).unwrap();
        }
    }
}
