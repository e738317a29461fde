//! Loading indicator shown while a query is in flight

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::theme;
use crate::widgets::popup;

pub const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub const LOADING_MESSAGE: &str = "Analyzing your question and searching the datasets...";

/// Spinner glyph and color for a given frame
pub fn spinner_frame(frame_count: u64) -> (char, Color) {
    // Advance every other frame so the spinner is readable at the 100ms tick
    let step = (frame_count / 2) as usize;
    let colors = theme::loading::SPINNER_COLORS;
    (
        SPINNER_CHARS[step % SPINNER_CHARS.len()],
        colors[step % colors.len()],
    )
}

pub fn render_loading(frame_count: u64, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::loading::BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (spinner, color) = spinner_frame(frame_count);
    let line = Line::from(vec![
        Span::styled(format!("{} ", spinner), Style::default().fg(color)),
        Span::styled(LOADING_MESSAGE, Style::default().fg(theme::loading::TEXT)),
    ]);

    let width = (LOADING_MESSAGE.chars().count() + 2) as u16;
    let text_area = popup::centered(inner, width, 1);
    frame.render_widget(Paragraph::new(line), text_area);
}
