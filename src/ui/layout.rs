//! Layout components (header, panes, status bar)

use crate::app::App;
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::RequestState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Height of the form pane: five field rows of 3 plus borders
const FORM_HEIGHT: u16 = 17;

/// Screen regions
pub struct AppLayout {
    pub header: Rect,
    pub form: Rect,
    pub actions: Rect,
    pub chart: Rect,
    pub status: Rect,
}

/// Split the screen into header, form, action panel, chart and status bar
pub fn create_layout(area: Rect) -> AppLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),           // Header
            Constraint::Length(FORM_HEIGHT), // Form + actions
            Constraint::Min(6),              // History chart
            Constraint::Length(1),           // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(24), // Action panel
        ])
        .split(rows[1]);

    AppLayout {
        header: rows[0],
        form: columns[0],
        actions: columns[1],
        chart: rows[2],
        status: rows[3],
    }
}

/// Draw the one-line header with the service endpoint
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" Car Price TUI ", Style::default().fg(Color::Cyan)),
        Span::styled(
            format!("→ {}", app.service_url),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Request status
    let request_status = match app.controller.request_state() {
        RequestState::Pending => Span::styled(" ◌ ", Style::default().fg(Color::Yellow)),
        RequestState::Idle => Span::styled(" ● ", Style::default().fg(Color::Green)),
    };
    spans.push(request_status);

    spans.push(Span::styled(
        view_hints(app.state.cursor.is_buttons_row_active()),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    if let Some(err) = app.controller.last_error() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(err, Style::default().fg(Color::Red)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    if area.height == 0 {
        return;
    }

    // Quit hint on the right (double Ctrl+C to quit)
    let quit_hint = " ^C^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: area.height.min(1),
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the focused region
fn view_hints(on_buttons_row: bool) -> String {
    if on_buttons_row {
        format!("←/→:button  Enter:press  Tab:fields  {SUBMIT_SHORTCUT}:predict  Esc:quit")
    } else {
        format!(
            "Tab/↑↓:field  ←/→:choose  {SUBMIT_SHORTCUT}:predict  {RESET_SHORTCUT}:reset  Esc:quit"
        )
    }
}
