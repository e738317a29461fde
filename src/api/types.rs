//! Wire types for the query service

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /query`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryRequest {
    pub query: String,
}

/// Citation describing where part of an answer came from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub dataset: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl Source {
    /// Period to display; an empty period counts as absent
    pub fn display_period(&self) -> Option<&str> {
        self.period.as_deref().filter(|p| !p.is_empty())
    }
}

/// Response payload of `POST /query`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default)]
    pub raw_data: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
