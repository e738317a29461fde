//! Vertical scrollbar drawn on the right border of a scrollable pane

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
};

/// Render a vertical scrollbar when the content exceeds the viewport
///
/// # Arguments
/// * `area` - The full area including borders (scrollbar renders on right border)
/// * `total_lines` - Number of content lines
/// * `viewport_size` - Number of visible lines
/// * `scroll_offset` - Current scroll position (0 = top)
pub fn render_vertical_scrollbar(
    frame: &mut Frame,
    area: Rect,
    total_lines: usize,
    viewport_size: usize,
    scroll_offset: usize,
    color: Color,
) {
    if !needs_scrollbar(total_lines, viewport_size) {
        return;
    }

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(Style::default().fg(color))
        .track_style(Style::default().fg(color));

    // content_length = max_scroll + 1 so the thumb reaches the bottom at max scroll
    let max_scroll = total_lines.saturating_sub(viewport_size);
    let mut state = ScrollbarState::new(max_scroll + 1)
        .position(scroll_offset.min(max_scroll))
        .viewport_content_length(viewport_size);

    frame.render_stateful_widget(scrollbar, area, &mut state);
}

fn needs_scrollbar(total_lines: usize, viewport_size: usize) -> bool {
    viewport_size > 0 && total_lines > viewport_size
}
