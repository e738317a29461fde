//! Context-sensitive key hints on the bottom line

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, Focus};
use crate::theme;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

pub fn get_context_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if !app.is_submit_enabled() {
        hints!["Ctrl+C" => "Quit"]
    } else if app.focus == Focus::ResultsPane {
        hints!["j/k" => "Scroll", "y" => "Copy Answer", "Y" => "Copy Raw Data", "Esc" => "Edit Question", "q" => "Quit"]
    } else if app.ui.results().is_some() {
        hints!["Enter" => "Ask", "Tab" => "Browse Results", "Alt+1-9" => "Example", "Ctrl+Y" => "Copy Question", "Esc" => "Quit"]
    } else {
        hints!["Enter" => "Ask", "Alt+1-9" => "Example", "Ctrl+Y" => "Copy Question", "Esc" => "Quit"]
    }
}

fn build_styled_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    spans
}

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let spans = build_styled_spans(&get_context_hints(app));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
