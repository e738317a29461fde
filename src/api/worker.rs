//! API worker thread
//!
//! Handles query service requests in a background thread to avoid blocking the UI.
//! Receives requests via channel, makes the HTTP call, and sends the outcome back
//! to the main thread, which polls for it from the event loop.
//!
//! Requests are processed one at a time on a current-thread tokio runtime.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{Receiver, Sender};

use serde_json::Value;

use super::client::ApiClient;
use super::types::QueryResult;
use super::ApiError;

/// Work sent from the UI thread to the worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    /// Submit a question; `request_id` is echoed back in the response
    Query { query: String, request_id: u64 },
    /// Probe `GET /health`
    Health,
}

/// Outcome sent from the worker back to the UI thread
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Query {
        request_id: u64,
        result: Result<QueryResult, ApiError>,
    },
    Health(Result<Value, ApiError>),
    /// The worker could not run (runtime creation failed or it panicked)
    WorkerFailed(String),
}

/// Spawn the API worker thread
///
/// Creates a background thread with a tokio runtime that:
/// 1. Listens for requests on the request channel
/// 2. Makes the HTTP call for each request in arrival order
/// 3. Sends the outcome back via the response channel
///
/// The thread exits when the request channel is closed.
pub fn spawn_worker(
    client: ApiClient,
    request_rx: Receiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
) {
    std::thread::spawn(move || {
        let panic_tx = response_tx.clone();

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("Failed to create tokio runtime: {}", e);
                    let _ = response_tx.send(ApiResponse::WorkerFailed(format!(
                        "Failed to start network worker: {}",
                        e
                    )));
                    return;
                }
            };

            rt.block_on(worker_loop(client, request_rx, response_tx));
        }));

        if let Err(e) = result {
            let panic_msg = if let Some(s) = e.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = e.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            log::error!("API worker thread panicked: {}", panic_msg);
            let _ = panic_tx.send(ApiResponse::WorkerFailed(format!(
                "Network worker crashed: {}",
                panic_msg
            )));
        }
    });
}

/// Main async worker loop - processes requests until the channel is closed
///
/// Uses blocking `recv()` on the request channel (fine in dedicated thread).
async fn worker_loop(
    client: ApiClient,
    request_rx: Receiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        let response = handle_request(&client, request).await;
        if response_tx.send(response).is_err() {
            // Main thread is gone
            break;
        }
    }
}

async fn handle_request(client: &ApiClient, request: ApiRequest) -> ApiResponse {
    match request {
        ApiRequest::Query { query, request_id } => {
            log::debug!(
                "Request {} -> {}: {:?}",
                request_id,
                client.endpoint().query_url(),
                query
            );
            let result = client.query(&query).await;
            if let Err(e) = &result {
                log::error!("Query error: {}", e);
            }
            ApiResponse::Query { request_id, result }
        }
        ApiRequest::Health => ApiResponse::Health(client.health().await),
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
