//! Error types with fix suggestions
//!
//! Error code ranges:
//! - DAG-001-009: Request payload errors
//! - DAG-010-019: Config/startup errors

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DagCheckError>;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

#[derive(Error, Debug)]
pub enum DagCheckError {
    // ─────────────────────────────────────────────────────────────
    // Request payload errors (DAG-001 to DAG-004)
    // ─────────────────────────────────────────────────────────────
    #[error("[DAG-001] Invalid JSON format")]
    InvalidJson,

    #[error("[DAG-002] {reason}")]
    Processing { reason: String },

    #[error("[DAG-003] Missing form field '{field}'")]
    MissingField { field: String },

    #[error("[DAG-004] Unreadable form body: {reason}")]
    InvalidForm { reason: String },

    // ─────────────────────────────────────────────────────────────
    // Config/startup errors (DAG-010 to DAG-011)
    // ─────────────────────────────────────────────────────────────
    #[error("[DAG-010] Configuration error: {reason}")]
    ConfigError { reason: String },

    #[error("[DAG-011] IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DagCheckError {
    /// HTTP status reported to the caller
    pub fn status(&self) -> StatusCode {
        match self {
            DagCheckError::InvalidJson => StatusCode::BAD_REQUEST,
            DagCheckError::MissingField { .. } | DagCheckError::InvalidForm { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            DagCheckError::Processing { .. }
            | DagCheckError::ConfigError { .. }
            | DagCheckError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `detail` field of the response body
    ///
    /// Clients read this field, so it carries the bare message without the code.
    pub fn detail(&self) -> String {
        match self {
            DagCheckError::InvalidJson => "Invalid JSON format".to_string(),
            DagCheckError::Processing { reason } => reason.clone(),
            DagCheckError::MissingField { field } => format!("Missing form field '{field}'"),
            DagCheckError::InvalidForm { reason } => reason.clone(),
            DagCheckError::ConfigError { reason } => reason.clone(),
            DagCheckError::Io(e) => e.to_string(),
        }
    }
}

impl FixSuggestion for DagCheckError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            DagCheckError::InvalidJson => Some("Send the pipeline field as a JSON object string"),
            DagCheckError::Processing { .. } => {
                Some("Every node needs a scalar 'id', every edge a 'source' and 'target'")
            }
            DagCheckError::MissingField { .. } | DagCheckError::InvalidForm { .. } => {
                Some("Post the graph as form field 'pipeline' (urlencoded or multipart)")
            }
            DagCheckError::ConfigError { .. } => Some("Check the TOML config file and CLI flags"),
            DagCheckError::Io(_) => Some("Check the bind address is free and the file path exists"),
        }
    }
}

impl IntoResponse for DagCheckError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }
        (status, Json(json!({ "detail": self.detail() }))).into_response()
    }
}
