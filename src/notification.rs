//! Notification module for samarth
//!
//! Transient toast messages shown in the top-right corner: copy confirmations
//! and configuration warnings.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{NotificationState, NotificationType};
