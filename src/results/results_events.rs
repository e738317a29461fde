use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Focus};
use crate::clipboard::clipboard_events::{CopyTarget, copy_target};

pub fn handle_results_pane_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('d') if ctrl => app.results_scroll.page_down(),
        KeyCode::Char('u') if ctrl => app.results_scroll.page_up(),
        KeyCode::Char('j') | KeyCode::Down => app.results_scroll.scroll_down(1),
        KeyCode::Char('k') | KeyCode::Up => app.results_scroll.scroll_up(1),
        KeyCode::Char('J') => app.results_scroll.scroll_down(10),
        KeyCode::Char('K') => app.results_scroll.scroll_up(10),
        KeyCode::PageDown => app.results_scroll.page_down(),
        KeyCode::PageUp => app.results_scroll.page_up(),
        KeyCode::Char('g') | KeyCode::Home => app.results_scroll.reset(),
        KeyCode::Char('G') | KeyCode::End => app.results_scroll.jump_to_bottom(),
        KeyCode::Char('y') => {
            copy_target(app, CopyTarget::Answer);
        }
        KeyCode::Char('Y') => {
            copy_target(app, CopyTarget::RawData);
        }
        KeyCode::Char('i') | KeyCode::Char('/') | KeyCode::Esc => app.focus = Focus::InputField,
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}
