//! Async client for the query service
//!
//! Uses reqwest for HTTP. Response classification is kept in a pure function so
//! the status/payload rules can be exercised without a server.

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use super::endpoint::ApiEndpoint;
use super::types::{QueryRequest, QueryResult};
use super::{ApiError, FAILED_TO_PROCESS_MESSAGE, UNKNOWN_ERROR_MESSAGE};

/// HTTP client bound to one endpoint
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    endpoint: ApiEndpoint,
}

impl ApiClient {
    pub fn new(endpoint: ApiEndpoint) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &ApiEndpoint {
        &self.endpoint
    }

    /// Send one question to `POST /query`
    ///
    /// # Returns
    /// * `Ok(result)` - HTTP success and `success: true`
    /// * `Err(ApiError::Transport)` - send failed or the body was not valid JSON
    /// * `Err(ApiError::Application)` - failure status or `success != true`
    pub async fn query(&self, query: &str) -> Result<QueryResult, ApiError> {
        let body = serde_json::to_string(&QueryRequest {
            query: query.to_string(),
        })
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let response = self
            .client
            .post(self.endpoint.query_url())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let is_success = response.status().is_success();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        interpret_query_response(is_success, &text)
    }

    /// Fetch `GET /health`; any status with a JSON body counts as reachable
    pub async fn health(&self) -> Result<Value, ApiError> {
        let response = self
            .client
            .get(self.endpoint.health_url())
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        serde_json::from_str(&text).map_err(|e| ApiError::Transport(e.to_string()))
    }
}

/// Classify a `/query` response body
///
/// The body is parsed before the status is looked at, so an unparseable error
/// page surfaces as a transport error.
pub fn interpret_query_response(is_success: bool, body: &str) -> Result<QueryResult, ApiError> {
    let data: Value = serde_json::from_str(body).map_err(|e| ApiError::Transport(e.to_string()))?;

    if !is_success {
        return Err(ApiError::Application(
            error_text(&data).unwrap_or_else(|| FAILED_TO_PROCESS_MESSAGE.to_string()),
        ));
    }

    if data.get("success") != Some(&Value::Bool(true)) {
        return Err(ApiError::Application(
            error_text(&data).unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string()),
        ));
    }

    serde_json::from_value(data).map_err(|e| ApiError::Transport(e.to_string()))
}

/// Server-supplied error text; empty, null and false count as missing
fn error_text(data: &Value) -> Option<String> {
    match data.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
