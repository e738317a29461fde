use crate::api::{ApiChannel, ApiEndpoint};
use crate::config::{ClipboardBackend, Config};
use crate::example_queries::ExampleQueries;
use crate::input::InputState;
use crate::notification::NotificationState;
use crate::scroll::ScrollState;

use super::ui_state::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    InputField,
    ResultsPane,
}

pub struct App {
    pub input: InputState,
    pub ui: UiState,
    pub focus: Focus,
    pub results_scroll: ScrollState,
    pub examples: ExampleQueries,
    pub notification: NotificationState,
    pub clipboard_backend: ClipboardBackend,
    pub api: ApiChannel,
    pub endpoint: ApiEndpoint,
    pub should_quit: bool,
    pub frame_count: u64,
    dirty: bool,
}

impl App {
    pub fn new(config: &Config, endpoint: ApiEndpoint) -> Self {
        Self {
            input: InputState::new(),
            ui: UiState::Idle,
            focus: Focus::InputField,
            results_scroll: ScrollState::new(),
            examples: ExampleQueries::from_config(&config.examples),
            notification: NotificationState::new(),
            clipboard_backend: config.clipboard.backend,
            api: ApiChannel::new(),
            endpoint,
            should_quit: false,
            frame_count: 0,
            dirty: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn query(&self) -> &str {
        self.input.query()
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Redraw after input, on every tick while the spinner or a toast is showing
    pub fn should_render(&self) -> bool {
        self.dirty || self.ui.is_loading() || self.notification.is_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Location;
    use crate::test_utils::test_helpers::test_app;

    #[test]
    fn test_app_initialization() {
        let app = test_app();

        assert_eq!(app.ui, UiState::Idle);
        assert_eq!(app.focus, Focus::InputField);
        assert_eq!(app.results_scroll.offset, 0);
        assert!(!app.should_quit());
        assert_eq!(app.query(), "");
        assert!(app.should_render());
        assert_eq!(
            app.endpoint,
            ApiEndpoint::select(&Location::local_file())
        );
    }

    #[test]
    fn test_config_is_applied() {
        let mut config = Config::default();
        config.clipboard.backend = ClipboardBackend::Osc52;
        config.examples.queries = vec!["Rainfall in Salem".to_string()];

        let app = App::new(&config, ApiEndpoint::select(&Location::local_file()));

        assert_eq!(app.clipboard_backend, ClipboardBackend::Osc52);
        assert_eq!(app.examples.get(1), Some("Rainfall in Salem"));
    }

    #[test]
    fn test_dirty_flag() {
        let mut app = test_app();
        app.clear_dirty();
        assert!(!app.should_render());

        app.mark_dirty();
        assert!(app.should_render());
    }

    #[test]
    fn test_loading_always_renders() {
        let mut app = test_app();
        app.clear_dirty();
        app.ui = UiState::Loading;
        assert!(app.should_render());
    }
}
