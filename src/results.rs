//! Results pane: answer, source citations, and raw data

pub mod format;
pub mod results_events;
pub mod results_render;
