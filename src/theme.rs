//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. Render files use
//! `theme::module::CONSTANT` instead of hardcoding `Color::*` values.
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_SURFACE: Color = Color::Rgb(35, 35, 58);

    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const GREEN: Color = Color::Rgb(107, 203, 119);
    pub const MAGENTA: Color = Color::Rgb(198, 120, 221);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
    pub const ORANGE: Color = Color::Rgb(255, 184, 108);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);

    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Question field styles
pub mod input {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::CYAN;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;
    pub const BORDER_BUSY: Color = palette::ORANGE;
    pub const TITLE: Color = palette::TEXT;
    pub const PLACEHOLDER: Color = palette::TEXT_DIM;
    pub const CURSOR: Style = palette::CURSOR;

    // Submit affordance
    pub const SUBMIT_ENABLED: Color = palette::GREEN;
    pub const SUBMIT_BUSY: Color = palette::ORANGE;
}

/// Inline error banner
pub mod banner {
    use super::*;

    pub const BORDER: Color = palette::ERROR;
    pub const TEXT: Color = palette::ERROR;
}

/// Results pane styles
pub mod results {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::CYAN;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;
    pub const TITLE: Color = palette::CYAN;
    pub const SCROLLBAR: Color = palette::TEXT_DIM;

    pub const SECTION_HEADER: Style = Style::new()
        .fg(palette::PURPLE)
        .add_modifier(Modifier::BOLD);
    pub const ANSWER: Color = palette::TEXT;
    pub const DATASET: Style = Style::new().fg(palette::CYAN).add_modifier(Modifier::BOLD);
    pub const SOURCE_DETAIL: Color = palette::TEXT_MUTED;
    pub const SOURCE_DESCRIPTION: Color = palette::TEXT;
    pub const NO_SOURCES: Color = palette::TEXT_DIM;
    pub const RAW_DATA: Color = palette::GREEN;
}

/// Loading indicator
pub mod loading {
    use super::*;

    pub const SPINNER_COLORS: [Color; 4] =
        [palette::CYAN, palette::MAGENTA, palette::PINK, palette::PURPLE];
    pub const TEXT: Color = palette::TEXT_MUTED;
    pub const BORDER: Color = palette::TEXT_DIM;
}

/// Example query list
pub mod examples {
    use super::*;

    pub const BORDER: Color = palette::TEXT_DIM;
    pub const TITLE: Color = palette::PURPLE;
    pub const CATEGORY: Style = Style::new()
        .fg(palette::MAGENTA)
        .add_modifier(Modifier::BOLD);
    pub const SHORTCUT: Color = palette::WARNING;
    pub const QUERY: Color = palette::TEXT;
}

/// Bottom help line
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::CYAN;
    pub const DESCRIPTION: Color = palette::TEXT_MUTED;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
}

/// Toast notifications
pub mod notification {
    use super::*;

    pub const INFO_FG: Color = palette::TEXT;
    pub const INFO_BG: Color = palette::BG_SURFACE;
    pub const WARNING_FG: Color = Color::Black;
    pub const WARNING_BG: Color = palette::WARNING;
}
