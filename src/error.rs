//! Failure reasons for the two external actions and configuration errors

use std::time::Duration;
use thiserror::Error;

/// Result type for the launch and search actions
pub type ActionResult<T> = Result<T, ActionFailure>;

/// Why an activation did not succeed.
///
/// The view surfaces every variant through the same notification. The tag is
/// kept on the model and in the logs so callers can tell the causes apart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionFailure {
    #[error("search service is unreachable: {message}")]
    Unreachable { message: String },

    #[error("search service answered with status {status}")]
    BadStatus { status: u16 },

    #[error("search service returned a malformed body: {details}")]
    MalformedBody { details: String },

    #[error("search request timed out after {timeout:?}")]
    TimedOut { timeout: Duration },

    #[error("action was cancelled before it completed")]
    Cancelled,

    #[error("could not open a browser: {message}")]
    LaunchFailed { message: String },
}

impl ActionFailure {
    pub fn unreachable(message: impl Into<String>) -> Self {
        ActionFailure::Unreachable {
            message: message.into(),
        }
    }

    pub fn bad_status(status: u16) -> Self {
        ActionFailure::BadStatus { status }
    }

    pub fn malformed_body(details: impl Into<String>) -> Self {
        ActionFailure::MalformedBody {
            details: details.into(),
        }
    }

    pub fn timed_out(timeout: Duration) -> Self {
        ActionFailure::TimedOut { timeout }
    }

    pub fn launch_failed(message: impl Into<String>) -> Self {
        ActionFailure::LaunchFailed {
            message: message.into(),
        }
    }

    /// Short tag used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            ActionFailure::Unreachable { .. } => "unreachable",
            ActionFailure::BadStatus { .. } => "bad_status",
            ActionFailure::MalformedBody { .. } => "malformed_body",
            ActionFailure::TimedOut { .. } => "timed_out",
            ActionFailure::Cancelled => "cancelled",
            ActionFailure::LaunchFailed { .. } => "launch_failed",
        }
    }
}

impl From<reqwest::Error> for ActionFailure {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ActionFailure::bad_status(status.as_u16())
        } else if err.is_decode() {
            ActionFailure::malformed_body(err.to_string())
        } else {
            // Connection refused, DNS failures, resets, interrupted bodies and
            // builder errors all mean the service could not be talked to.
            // Timeouts are enforced by the executor, not the client.
            ActionFailure::unreachable(err.to_string())
        }
    }
}

impl From<std::io::Error> for ActionFailure {
    fn from(err: std::io::Error) -> Self {
        ActionFailure::launch_failed(err.to_string())
    }
}

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
