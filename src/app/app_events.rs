use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::{App, Focus};
use crate::clipboard;
use crate::results;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.poll_api_responses();

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.handle_paste_event(&text);
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_paste_event(&mut self, text: &str) {
        if self.focus == Focus::InputField && self.is_submit_enabled() {
            self.input.insert_paste(text);
            self.mark_dirty();
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if handle_global_keys(self, key) {
            return;
        }

        if clipboard::clipboard_events::handle_clipboard_key(self, key) {
            return;
        }

        match self.focus {
            Focus::InputField => self.handle_input_field_key(key),
            Focus::ResultsPane => results::results_events::handle_results_pane_key(self, key),
        }
    }

    fn handle_input_field_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            // Ctrl+M is what many terminals send for Enter
            KeyCode::Enter => {
                self.submit_query();
            }
            KeyCode::Char('m') if ctrl => {
                self.submit_query();
            }
            KeyCode::Esc => self.should_quit = true,
            _ => {
                // The field is read-only while a query is in flight
                if self.is_submit_enabled() {
                    self.input.textarea.input(key);
                }
            }
        }
    }
}

/// Keys that work regardless of focus
fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return true;
    }

    if let Some(number) = example_shortcut(key) {
        app.submit_example(number);
        return true;
    }

    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        app.focus = match app.focus {
            Focus::InputField if app.ui.results().is_some() => Focus::ResultsPane,
            _ => Focus::InputField,
        };
        return true;
    }

    false
}

/// Alt+1..Alt+9 or F1..F9 pick an example question
fn example_shortcut(key: KeyEvent) -> Option<usize> {
    match key.code {
        KeyCode::Char(c @ '1'..='9') if key.modifiers.contains(KeyModifiers::ALT) => {
            c.to_digit(10).map(|d| d as usize)
        }
        KeyCode::F(n @ 1..=9) => Some(n as usize),
        _ => None,
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
