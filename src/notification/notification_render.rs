//! Notification rendering

use ratatui::{
    Frame,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::notification_state::{NotificationState, NotificationType};
use crate::theme;
use crate::widgets::popup;

/// Render the notification overlay in the top-right corner of the frame
///
/// Call after the main UI so the toast draws on top.
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState) {
    notification.clear_if_expired();

    let Some(notif) = notification.current() else {
        return;
    };

    let (fg, bg) = match notif.notification_type {
        NotificationType::Info => (theme::notification::INFO_FG, theme::notification::INFO_BG),
        NotificationType::Warning => (
            theme::notification::WARNING_FG,
            theme::notification::WARNING_BG,
        ),
    };

    // 2 padding + 2 borders
    let width = notif.message.chars().count() as u16 + 4;
    let area = popup::top_right(frame.area(), width, 3, 2);

    if area.width < 5 || area.height < 3 {
        return;
    }

    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(bg).bg(bg))
        .style(Style::default().bg(bg));

    let text = Line::from(Span::styled(
        format!(" {} ", notif.message),
        Style::default().fg(fg).bg(bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), area);
}
