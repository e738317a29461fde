use crate::api::QueryResult;

/// What the main area shows; exactly one is active at a time
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiState {
    /// Waiting for a question; example list visible
    #[default]
    Idle,
    /// A query is in flight; submit is disabled
    Loading,
    /// Inline error banner with this message
    Error(String),
    /// Answer, sources and raw data of the last successful query
    Results(QueryResult),
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            UiState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn results(&self) -> Option<&QueryResult> {
        match self {
            UiState::Results(result) => Some(result),
            _ => None,
        }
    }
}
