use ratatui::style::Style;
use tui_textarea::TextArea;

use crate::theme;

pub const PLACEHOLDER: &str = "Ask about rainfall or crop production, e.g. Top 5 districts by rainfall in Tamil Nadu";

/// Single-line question field
pub struct InputState {
    pub textarea: TextArea<'static>,
    pub scroll_offset: usize,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(theme::input::CURSOR);

        Self {
            textarea,
            scroll_offset: 0,
        }
    }

    /// Current text, untrimmed
    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Replace the whole field, e.g. when an example query is picked
    pub fn set_text(&mut self, text: &str) {
        self.clear();
        self.textarea.insert_str(flatten(text));
    }

    /// Insert pasted text at the cursor; line breaks become spaces
    pub fn insert_paste(&mut self, text: &str) {
        self.textarea.insert_str(flatten(text));
    }

    pub fn clear(&mut self) {
        self.textarea.move_cursor(tui_textarea::CursorMove::End);
        self.textarea.delete_line_by_head();
        self.scroll_offset = 0;
    }

    pub fn cursor_col(&self) -> usize {
        self.textarea.cursor().1
    }

    /// Keep the cursor inside a viewport of `viewport_width` characters
    pub fn calculate_scroll_offset(&mut self, viewport_width: usize) {
        if viewport_width == 0 {
            self.scroll_offset = 0;
            return;
        }

        let cursor_col = self.cursor_col();
        let text_length = self.query().chars().count();
        let mut new_scroll = self.scroll_offset;

        if cursor_col < new_scroll {
            new_scroll = cursor_col;
        } else if cursor_col >= new_scroll + viewport_width {
            new_scroll = cursor_col + 1 - viewport_width;
        }

        // Pull back when text shrinks so the viewport stays filled
        if text_length < new_scroll + viewport_width {
            let min_scroll = text_length.saturating_sub(viewport_width);
            let max_scroll_for_cursor = cursor_col.saturating_sub(viewport_width - 1);
            new_scroll = new_scroll.min(min_scroll.max(max_scroll_for_cursor));
        }

        self.scroll_offset = new_scroll;
    }
}

fn flatten(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}
