//! Typed HTTP response bodies.

use serde::{Deserialize, Serialize};

use super::Paper;

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootInfo {
    pub message: String,
    pub endpoints: Vec<String>,
    pub version: String,
    pub status: String,
}

/// Body of `GET /api/v1/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    /// RFC 3339 timestamp.
    pub timestamp: String,
    pub services: ServiceStatus,
}

/// Sub-service flags reported by the health check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub api: String,
    pub openalex: String,
}

/// Body of `GET /api/v1/papers/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    pub meta: SearchMeta,
    pub results: Vec<Paper>,
}

/// Search metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchMeta {
    /// Total upstream matches, not the page length.
    pub count: u64,
}

/// Error body shared by every failing endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl ErrorEnvelope {
    /// Create an envelope carrying only a message.
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into(), ..Self::default() }
    }

    #[must_use]
    pub const fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Stamp the current time in RFC 3339.
    #[must_use]
    pub fn timestamped(mut self) -> Self {
        self.time = Some(chrono::Utc::now().to_rfc3339());
        self
    }

    #[must_use]
    pub fn at(mut self, method: impl Into<String>, path: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}
