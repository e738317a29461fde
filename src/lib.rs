//! samarth library - terminal client for the Samarth Q&A service
//!
//! This library exposes the core functionality of samarth for the binary and for testing.

pub mod api;
pub mod app;
pub mod banner;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod example_queries;
pub mod help_line;
pub mod input;
pub mod loading;
pub mod notification;
pub mod results;
pub mod scroll;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::{App, Focus, UiState};
pub use config::Config;
