//! Inline error banner pinned under the question field

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::results::format::wrap_text;
use crate::theme;

const ELLIPSIS: char = '…';

/// Rows the banner needs for `message`, borders included, capped at `max_height`
///
/// The banner grows with the message; the cap keeps room for the rest of the
/// screen. It never drops below the three rows a one-line message needs.
pub fn banner_height(message: &str, frame_width: u16, max_height: u16) -> u16 {
    let lines = wrap_text(message, frame_width.saturating_sub(2) as usize).len();
    let wanted = (lines.max(1) as u16).saturating_add(2);
    wanted.min(max_height.max(3))
}

/// Message lines that fit in `rows`; a cut is marked with an ellipsis
pub fn visible_lines(message: &str, width: usize, rows: usize) -> Vec<String> {
    let mut lines = wrap_text(message, width);
    if lines.len() <= rows {
        return lines;
    }

    lines.truncate(rows);
    if let Some(last) = lines.last_mut() {
        let keep = width.saturating_sub(1);
        let mut cut: String = last.trim_end().chars().take(keep).collect();
        cut.push(ELLIPSIS);
        *last = cut;
    }
    lines
}

pub fn render_banner(message: &str, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::banner::BORDER));

    let inner = block.inner(area);
    let lines: Vec<Line> = visible_lines(message, inner.width as usize, inner.height as usize)
        .into_iter()
        .map(|line| Line::styled(line, Style::default().fg(theme::banner::TEXT)))
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
