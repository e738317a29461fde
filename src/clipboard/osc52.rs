use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};

use super::ClipboardError;

pub fn copy(text: &str) -> Result<(), ClipboardError> {
    let mut stdout = io::stdout();
    stdout
        .write_all(encode(text).as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|_| ClipboardError::WriteError)
}

/// `ESC ] 52 ; c ; <base64> BEL`
pub fn encode(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}
