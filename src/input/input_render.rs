use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::input_state::PLACEHOLDER;
use crate::app::{App, Focus};
use crate::loading::spinner_frame;
use crate::theme;

/// Label and color of the submit affordance
///
/// While a query is in flight the label is swapped for a busy indicator.
pub fn submit_label(app: &App) -> (String, ratatui::style::Color) {
    if app.is_submit_enabled() {
        (" [ Enter ▸ Ask ] ".to_string(), theme::input::SUBMIT_ENABLED)
    } else {
        let (spinner, _) = spinner_frame(app.frame_count);
        (
            format!(" [ {} Asking... ] ", spinner),
            theme::input::SUBMIT_BUSY,
        )
    }
}

pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) {
    let viewport_width = area.width.saturating_sub(2) as usize;
    app.input.calculate_scroll_offset(viewport_width);

    let focused = app.focus == Focus::InputField;
    let border_color = if !app.is_submit_enabled() {
        theme::input::BORDER_BUSY
    } else if focused {
        theme::input::BORDER_FOCUSED
    } else {
        theme::input::BORDER_UNFOCUSED
    };

    let (label, label_color) = submit_label(app);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(Span::styled(
            " Ask Samarth ",
            Style::default().fg(theme::input::TITLE),
        )))
        .title_top(
            Line::from(Span::styled(
                label,
                Style::default()
                    .fg(label_color)
                    .add_modifier(Modifier::BOLD),
            ))
            .right_aligned(),
        )
        .border_style(Style::default().fg(border_color));

    let query = app.query();
    let line = if query.is_empty() {
        placeholder_line(focused)
    } else {
        visible_line(
            query,
            app.input.scroll_offset,
            viewport_width,
            focused.then(|| app.input.cursor_col()),
        )
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn placeholder_line(focused: bool) -> Line<'static> {
    let placeholder = Style::default().fg(theme::input::PLACEHOLDER);
    if focused {
        let mut chars = PLACEHOLDER.chars();
        let first = chars.next().map(String::from).unwrap_or_default();
        Line::from(vec![
            Span::styled(first, placeholder.patch(theme::input::CURSOR)),
            Span::styled(chars.collect::<String>(), placeholder),
        ])
    } else {
        Line::from(Span::styled(PLACEHOLDER, placeholder))
    }
}

/// Slice of the query that fits the viewport, with the cursor cell reversed
fn visible_line(
    query: &str,
    scroll_offset: usize,
    viewport_width: usize,
    cursor_col: Option<usize>,
) -> Line<'static> {
    let visible: Vec<char> = query
        .chars()
        .skip(scroll_offset)
        .take(viewport_width)
        .collect();

    let Some(cursor_col) = cursor_col else {
        return Line::from(visible.into_iter().collect::<String>());
    };

    let cursor_in_view = cursor_col.saturating_sub(scroll_offset);
    let before: String = visible.iter().take(cursor_in_view).collect();
    let at: String = visible
        .get(cursor_in_view)
        .map(|c| c.to_string())
        .unwrap_or_else(|| " ".to_string());
    let after: String = visible.iter().skip(cursor_in_view + 1).collect();

    Line::from(vec![
        Span::raw(before),
        Span::styled(at, theme::input::CURSOR),
        Span::raw(after),
    ])
}
