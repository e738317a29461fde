//! Base URL selection
//!
//! The backend is picked once at startup by looking at the origin the client runs
//! for, the same way a page inspects its own host: local origins talk to the
//! development server, everything else talks to the deployed service.

use reqwest::Url;

use crate::error::SamarthError;

/// Development backend
pub const LOCAL_API_URL: &str = "http://localhost:5000";

/// Deployed backend
pub const DEPLOYED_API_URL: &str = "https://project-samarth-7kzm.onrender.com";

/// Hostname and protocol of the origin the client was launched for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub hostname: String,
    /// Scheme including the trailing colon, e.g. `https:` or `file:`
    pub protocol: String,
}

impl Location {
    /// Location of a page opened straight from disk
    pub fn local_file() -> Self {
        Self {
            hostname: String::new(),
            protocol: "file:".to_string(),
        }
    }

    /// Parse an origin URL; `None` behaves like a page opened from disk
    pub fn from_origin(origin: Option<&str>) -> Result<Self, SamarthError> {
        let Some(origin) = origin else {
            return Ok(Self::local_file());
        };

        let url = Url::parse(origin.trim()).map_err(|e| SamarthError::InvalidOrigin {
            origin: origin.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            hostname: url.host_str().unwrap_or_default().to_string(),
            protocol: format!("{}:", url.scheme()),
        })
    }

    fn is_local(&self) -> bool {
        self.hostname == "localhost" || self.hostname.is_empty() || self.protocol == "file:"
    }
}

/// Base URL of the query service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint {
    base_url: String,
}

impl ApiEndpoint {
    /// Two-way switch between the development and deployed backends
    pub fn select(location: &Location) -> Self {
        let base_url = if location.is_local() {
            LOCAL_API_URL
        } else {
            DEPLOYED_API_URL
        };

        #[cfg(debug_assertions)]
        log::debug!(
            "Selected API base {} for host '{}' ({})",
            base_url,
            location.hostname,
            location.protocol
        );

        Self {
            base_url: base_url.to_string(),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn query_url(&self) -> String {
        format!("{}/query", self.base_url)
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }
}
