use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Rect anchored to the top-right corner of `frame_area` with a margin
pub fn top_right(frame_area: Rect, width: u16, height: u16, margin: u16) -> Rect {
    let width = width.min(frame_area.width.saturating_sub(margin * 2));
    let height = height.min(frame_area.height.saturating_sub(margin * 2));

    Rect {
        x: frame_area.x + frame_area.width.saturating_sub(width + margin),
        y: frame_area.y + margin,
        width,
        height,
    }
}

/// Rect centered inside `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
