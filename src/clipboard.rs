//! Clipboard support for copying the question, answer, or raw data
//!
//! - System clipboard (via arboard)
//! - OSC 52 escape sequences (for remote terminals)
//! - Auto mode (system with OSC 52 fallback)

pub mod clipboard_events;
mod osc52;

use thiserror::Error;

use crate::config::ClipboardBackend;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("system clipboard unavailable")]
    SystemUnavailable,
    #[error("failed to write to clipboard")]
    WriteError,
}

pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> Result<(), ClipboardError> {
    match backend {
        ClipboardBackend::System => copy_system(text),
        ClipboardBackend::Osc52 => osc52::copy(text),
        ClipboardBackend::Auto => copy_system(text).or_else(|_| osc52::copy(text)),
    }
}

fn copy_system(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|_| ClipboardError::SystemUnavailable)?;
    clipboard
        .set_text(text)
        .map_err(|_| ClipboardError::WriteError)
}
