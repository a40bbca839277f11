//! Application error types with rich context

use std::fmt;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Fallback text for a transport failure that carries no message of its own
pub const NETWORK_ERROR_TEXT: &str = "Network error";

/// Fallback text for a non-2xx response without a `{message, reason}` body
pub const UNKNOWN_ERROR_TEXT: &str = "An unknown error occurred";

/// Why a backend call did not succeed.
///
/// Kept `Clone` so it can travel inside TEA messages. The `Display` output is
/// the text shown to the user in a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiFailure {
    /// No response was received (connection refused, DNS, TLS, ...)
    Transport { message: String },

    /// Non-2xx response whose JSON body carried `message` (and usually `reason`)
    Backend {
        status: u16,
        message: String,
        reason: String,
    },

    /// Non-2xx response without the structured error shape
    Unexpected { status: u16 },
}

impl ApiFailure {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn backend(status: u16, message: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Backend {
            status,
            message: message.into(),
            reason: reason.into(),
        }
    }

    /// HTTP status of the failed response, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiFailure::Transport { .. } => None,
            ApiFailure::Backend { status, .. } | ApiFailure::Unexpected { status } => {
                Some(*status)
            }
        }
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiFailure::Transport { message } if message.trim().is_empty() => {
                f.write_str(NETWORK_ERROR_TEXT)
            }
            ApiFailure::Transport { message } => f.write_str(message),
            ApiFailure::Backend {
                message, reason, ..
            } => write!(f, "[message] {} [reason] {}", message, reason),
            ApiFailure::Unexpected { .. } => f.write_str(UNKNOWN_ERROR_TEXT),
        }
    }
}

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Process Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Signal handling error: {message}")]
    Signal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Backend API Errors
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Api(ApiFailure),

    #[error("Invalid backend URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Log stream error: {message}")]
    LogStream { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn signal(message: impl Into<String>) -> Self {
        Self::Signal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Api(ApiFailure::transport(message))
    }

    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn log_stream(message: impl Into<String>) -> Self {
        Self::LogStream {
            message: message.into(),
        }
    }

    /// Collapse any error into the failure shape carried by messages.
    ///
    /// Errors that never reached the backend are reported as transport failures.
    pub fn into_api_failure(self) -> ApiFailure {
        match self {
            Error::Api(failure) => failure,
            other => ApiFailure::transport(other.to_string()),
        }
    }
}

impl From<ApiFailure> for Error {
    fn from(failure: ApiFailure) -> Self {
        Error::Api(failure)
    }
}
