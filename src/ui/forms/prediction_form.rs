//! Vehicle attribute form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::FormField;
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Display string for the latest estimate
pub fn price_label(prediction: Option<f64>) -> Option<String> {
    prediction.map(|price| format!("Predicted Price: ${price}"))
}

/// Draw the nine attribute fields in a two-column grid
pub fn draw_prediction_form(frame: &mut Frame, area: Rect, app: &App) {
    let cursor = &app.state.cursor;
    let border_color = if cursor.is_buttons_row_active() {
        Color::DarkGray
    } else {
        Color::Cyan
    };

    let block = Block::default()
        .title(" Car Price Prediction ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = FormField::all();
    let row_count = fields.len().div_ceil(2);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            std::iter::repeat(Constraint::Length(3))
                .take(row_count)
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(inner);

    for (row_idx, pair) in fields.chunks(2).enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[row_idx]);

        for (col_idx, field) in pair.iter().enumerate() {
            let index = row_idx * 2 + col_idx;
            let value = app.controller.form().get(field.name);
            draw_field(
                frame,
                cols[col_idx],
                field,
                value,
                cursor.active_field_index == index,
            );
        }
    }
}

/// Draw the Predict/Reset buttons and the latest estimate
pub fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let cursor = &app.state.cursor;
    let is_focused = cursor.is_buttons_row_active();
    let is_pending = app.controller.is_pending();

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Predict (primary)
            Constraint::Length(BUTTON_HEIGHT), // Reset
            Constraint::Length(1),
            Constraint::Min(0), // Result and hints
        ])
        .split(inner_area);

    let predict_label = if is_pending {
        "Predicting..."
    } else {
        "Predict Price"
    };
    render_action_button(
        frame,
        chunks[0],
        predict_label,
        is_focused && cursor.selected_button == 0,
        !is_pending,
        Some(Color::Green),
    );
    render_action_button(
        frame,
        chunks[1],
        "Reset",
        is_focused && cursor.selected_button == 1,
        true,
        Some(Color::Yellow),
    );

    let mut lines = Vec::new();
    match price_label(app.controller.prediction_result()) {
        Some(label) => lines.push(Line::from(Span::styled(
            label,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))),
        None => lines.push(Line::from(Span::styled(
            "No estimate yet",
            Style::default().fg(Color::DarkGray),
        ))),
    }

    let missing = app.controller.form().missing_fields();
    if !missing.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("{} field(s) empty", missing.len()),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let result = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(result, chunks[3]);
}
