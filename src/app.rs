mod app_events;
mod app_render;
mod app_state;
mod controller;
mod ui_state;


pub use app_state::{App, Focus};
pub use controller::{BACKEND_UNREACHABLE_MESSAGE, EMPTY_QUERY_MESSAGE};
pub use ui_state::UiState;
