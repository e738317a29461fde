use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::copy_to_clipboard;
use crate::app::{App, Focus};
use crate::results::format::format_raw_data;

/// What a copy key grabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    Query,
    Answer,
    RawData,
}

/// Ctrl+Y copies whatever the focused region shows
pub fn handle_clipboard_key(app: &mut App, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('y') && key.modifiers.contains(KeyModifiers::CONTROL) {
        let target = match app.focus {
            Focus::InputField => CopyTarget::Query,
            Focus::ResultsPane => CopyTarget::Answer,
        };
        return copy_target(app, target);
    }

    false
}

pub fn copy_target(app: &mut App, target: CopyTarget) -> bool {
    let (text, confirmation) = match target {
        CopyTarget::Query => (app.query().trim().to_string(), "Copied question!"),
        CopyTarget::Answer => match app.ui.results() {
            Some(result) => (result.answer.clone(), "Copied answer!"),
            None => return false,
        },
        CopyTarget::RawData => match app.ui.results() {
            Some(result) => (format_raw_data(&result.raw_data), "Copied raw data!"),
            None => return false,
        },
    };

    if text.is_empty() {
        return false;
    }

    match copy_to_clipboard(&text, app.clipboard_backend) {
        Ok(()) => {
            app.notification.show(confirmation);
            true
        }
        Err(e) => {
            log::error!("Clipboard copy failed: {}", e);
            false
        }
    }
}
