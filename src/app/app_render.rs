use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app_state::App;
use super::ui_state::UiState;
use crate::banner::{banner_height, render_banner};
use crate::notification::render_notification;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.frame_count = self.frame_count.wrapping_add(1);

        let frame_area = frame.area();
        // Input, main area and help line keep their minimum rows
        let banner_max = frame_area.height.saturating_sub(3 + 3 + 1);
        let banner_rows = self
            .ui
            .error_message()
            .map_or(0, |message| banner_height(message, frame_area.width, banner_max));

        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(banner_rows),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame_area);
        let (input_area, banner_area, main_area, help_area) =
            (layout[0], layout[1], layout[2], layout[3]);

        crate::input::input_render::render_field(self, frame, input_area);

        if let Some(message) = self.ui.error_message() {
            render_banner(message, frame, banner_area);
        }

        match &self.ui {
            UiState::Idle | UiState::Error(_) => {
                crate::example_queries::example_render::render_panel(
                    &self.examples,
                    frame,
                    main_area,
                );
            }
            UiState::Loading => {
                crate::loading::render_loading(self.frame_count, frame, main_area);
            }
            UiState::Results(_) => {
                crate::results::results_render::render_pane(self, frame, main_area);
            }
        }

        crate::help_line::render_line(self, frame, help_area);

        render_notification(frame, &mut self.notification);
    }
}
