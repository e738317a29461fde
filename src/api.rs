//! Samarth query service API
//!
//! Endpoint selection, wire types, the async HTTP client, and the worker thread
//! that keeps network I/O off the UI thread.

mod channel;
mod client;
mod endpoint;
mod types;
pub mod worker;

use thiserror::Error;

pub use channel::{ApiChannel, Drained, WORKER_UNAVAILABLE_MESSAGE};
pub use client::{ApiClient, interpret_query_response};
pub use endpoint::{ApiEndpoint, DEPLOYED_API_URL, LOCAL_API_URL, Location};
pub use types::{QueryRequest, QueryResult, Source};
pub use worker::{ApiRequest, ApiResponse};

/// Fallback message when the server reports a non-success status without detail
pub const FAILED_TO_PROCESS_MESSAGE: &str = "Failed to process query";

/// Fallback message when the payload says `success: false` without detail
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

/// Errors that can occur while talking to the query service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request could not be sent or the response could not be parsed
    #[error("{0}")]
    Transport(String),

    /// Server answered, but with a failure status or `success != true`
    #[error("{0}")]
    Application(String),
}
