//! Estimate history chart

use crate::state::HistoryEntry;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

const BAR_WIDTH: u16 = 9;
const BAR_GAP: u16 = 1;

/// Bar heights are whole currency units; fractional prices are rounded
pub fn history_bars(history: &[HistoryEntry]) -> Vec<Bar<'static>> {
    history
        .iter()
        .map(|entry| {
            Bar::default()
                .value(entry.price.max(0.0).round() as u64)
                .label(Line::from(entry.sequence_id.to_string()))
                .text_value(entry.price.round().to_string())
        })
        .collect()
}

/// How many of the most recent entries fit in `width` columns
fn visible_count(width: u16) -> usize {
    (width.saturating_sub(2) / (BAR_WIDTH + BAR_GAP)).max(1) as usize
}

/// Draw the estimate history as a bar chart, newest on the right
pub fn draw_history(frame: &mut Frame, area: Rect, history: &[HistoryEntry]) {
    let block = Block::default()
        .title(format!(" Estimate History ({}) ", history.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if history.is_empty() {
        let empty = Paragraph::new("Predictions will appear here.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // History is unbounded; only the tail that fits is drawn
    let start = history.len().saturating_sub(visible_count(area.width));
    let bars = history_bars(&history[start..]);

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        .bar_style(Style::default().fg(Color::Blue))
        .value_style(Style::default().fg(Color::White).bg(Color::Blue));

    frame.render_widget(chart, area);
}
