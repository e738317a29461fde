//! Query UI controller operations
//!
//! Every transition of [`UiState`] goes through here. Leaving `Loading` happens in
//! [`App::finish_query`] for success and failure alike, which is what re-enables
//! the submit affordance.

use crate::api::{ApiError, ApiResponse, QueryResult, WORKER_UNAVAILABLE_MESSAGE};

use super::app_state::{App, Focus};
use super::ui_state::UiState;

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a question";

pub const BACKEND_UNREACHABLE_MESSAGE: &str =
    "⚠ Backend API is not reachable. Please make sure the backend server is running.";

impl App {
    /// Submit is disabled while a query is in flight
    pub fn is_submit_enabled(&self) -> bool {
        !self.ui.is_loading()
    }

    /// Validate the question and send it to the worker
    ///
    /// Returns true when a request was dispatched.
    pub fn submit_query(&mut self) -> bool {
        if !self.is_submit_enabled() {
            return false;
        }

        let query = self.query().trim().to_string();
        if query.is_empty() {
            self.show_error(EMPTY_QUERY_MESSAGE);
            return false;
        }

        self.hide_error();
        self.hide_results();
        self.ui = UiState::Loading;
        self.focus = Focus::InputField;
        self.mark_dirty();

        match self.api.send_query(query) {
            Ok(request_id) => {
                log::info!("Submitted query {} to {}", request_id, self.endpoint.query_url());
                true
            }
            Err(message) => {
                self.finish_query(Err(ApiError::Transport(message)));
                false
            }
        }
    }

    /// Fill the field with example `number` and submit it
    pub fn submit_example(&mut self, number: usize) -> bool {
        if !self.is_submit_enabled() {
            return false;
        }
        let Some(query) = self.examples.get(number).map(str::to_string) else {
            return false;
        };
        self.input.set_text(&query);
        self.submit_query()
    }

    /// Leave `Loading` with either the results or an error
    pub fn finish_query(&mut self, result: Result<QueryResult, ApiError>) {
        match result {
            Ok(result) => self.render_results(result),
            Err(e) => {
                log::error!("Query error: {}", e);
                self.show_error(&format!("Error: {}", e));
            }
        }
    }

    /// Show a successful payload and scroll the pane back to its first line
    pub fn render_results(&mut self, result: QueryResult) {
        self.ui = UiState::Results(result);
        self.results_scroll.reset();
        self.mark_dirty();
    }

    pub fn hide_results(&mut self) {
        if self.ui.results().is_some() {
            self.ui = UiState::Idle;
            self.mark_dirty();
        }
    }

    /// Show the inline banner; focus returns to the field the banner sits under
    pub fn show_error(&mut self, message: &str) {
        self.ui = UiState::Error(message.to_string());
        self.focus = Focus::InputField;
        self.mark_dirty();
    }

    pub fn hide_error(&mut self) {
        if self.ui.error_message().is_some() {
            self.ui = UiState::Idle;
            self.mark_dirty();
        }
    }

    /// Ask the worker to probe `/health`; the outcome arrives via polling
    pub fn check_backend_health(&mut self) {
        if let Err(message) = self.api.send_health() {
            log::warn!("Could not check backend health: {}", message);
            self.show_health_warning();
        }
    }

    /// The warning only replaces an idle screen; otherwise it is just logged
    fn show_health_warning(&mut self) {
        if self.ui == UiState::Idle {
            self.show_error(BACKEND_UNREACHABLE_MESSAGE);
        }
    }

    /// Drain worker responses; returns true if anything changed
    pub fn poll_api_responses(&mut self) -> bool {
        let drained = self.api.drain();
        let changed = !drained.responses.is_empty() || drained.disconnected;

        for response in drained.responses {
            self.handle_api_response(response);
        }

        if drained.disconnected && self.ui.is_loading() {
            self.api.abandon_in_flight();
            self.finish_query(Err(ApiError::Transport(
                WORKER_UNAVAILABLE_MESSAGE.to_string(),
            )));
        }

        if changed {
            self.mark_dirty();
        }
        changed
    }

    pub fn handle_api_response(&mut self, response: ApiResponse) {
        match response {
            ApiResponse::Query { request_id, result } => {
                if self.api.complete(request_id) {
                    self.finish_query(result);
                } else {
                    log::debug!("Ignoring response for stale request {}", request_id);
                }
            }
            ApiResponse::Health(Ok(status)) => {
                log::info!("API Status: {}", status);
            }
            ApiResponse::Health(Err(e)) => {
                log::warn!("Could not connect to backend API: {}", e);
                self.show_health_warning();
            }
            ApiResponse::WorkerFailed(message) => {
                log::error!("{}", message);
                if self.ui.is_loading() {
                    self.api.abandon_in_flight();
                    self.finish_query(Err(ApiError::Transport(message)));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
