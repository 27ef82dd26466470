//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

/// Uniform failure surfaced by every backend call.
///
/// Callers log it and present the message; nothing here is fatal and every
/// failure is recoverable by user retry.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Non-2xx response. The message is the backend's `detail` field when
    /// the body carries one, else a generic status line.
    #[error("{message}")]
    Server {
        status: reqwest::StatusCode,
        message: String,
    },

    /// No usable response: connect failure, timeout, or body decode failure.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// A selected PDF could not be read from disk before upload.
    #[error("could not read {path}: {source}")]
    File {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ApiError {
    /// True when the failure was a request timeout.
    ///
    /// Timeouts arrive as `Transport`; this distinguishes them for callers
    /// that care.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Transport(err) if err.is_timeout())
    }
}

/// Errors emitted by the onboarding upload-and-extract workflow.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OnboardingError {
    #[error("select at least one file before uploading")]
    NoFiles,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Pulls the human-readable `detail` message out of an error body, if any.
///
/// The backend is a FastAPI service, so error bodies look like
/// `{"detail": "..."}`; a non-string detail is rendered as its JSON text.
#[must_use]
pub fn detail_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
