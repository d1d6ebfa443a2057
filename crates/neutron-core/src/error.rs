//! Error types for Neutron operations.
//!
//! Operations on the networking client only fail on transport errors; HTTP error
//! statuses are handed back to the caller as ordinary responses. The remaining
//! variants are produced by client construction, configuration loading, and the
//! opt-in decoding layer.

use thiserror::Error;

/// Main error type for Neutron operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The HTTP transport failed (DNS, connect, timeout, body read).
    ///
    /// The transport error is carried unmodified.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Configuration field outside its accepted range
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Operation has no implementation
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// Failed to parse a response body
    #[error("Failed to parse Neutron response: {0}")]
    ParseError(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Token rejected (401) or insufficient privileges (403)
    #[error("Unauthorized ({status}): {message}")]
    Unauthorized {
        /// 401 or 403
        status: u16,
        /// Response body, lossily decoded
        message: String,
    },

    /// Conflict error
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Any other non-success HTTP status
    #[error("HTTP error {status}: {message}")]
    HttpError {
        /// Status code returned by the service
        status: u16,
        /// Response body, lossily decoded
        message: String,
    },
}

/// Specialized result type for Neutron operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(err) if err.is_timeout() => "TIMEOUT",
            Self::Transport(err) if err.is_connect() => "CONNECT_ERROR",
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::NotImplemented(_) => "NOT_IMPLEMENTED",
            Self::ParseError(_) => "PARSE_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Unauthorized { status: 403, .. } => "FORBIDDEN",
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::Conflict(_) => "CONFLICT",
            Self::HttpError { .. } => "HTTP_ERROR",
        }
    }

    /// Builds the error matching a non-success HTTP status.
    ///
    /// 404, 401/403 and 409 get dedicated variants; everything else becomes
    /// [`Error::HttpError`].
    #[must_use]
    pub fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        match status.as_u16() {
            404 => Self::NotFound(body),
            code @ (401 | 403) => Self::Unauthorized {
                status: code,
                message: body,
            },
            409 => Self::Conflict(body),
            code => Self::HttpError {
                status: code,
                message: body,
            },
        }
    }

    /// Returns the HTTP status carried by this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            Self::NotFound(_) => Some(404),
            Self::Conflict(_) => Some(409),
            Self::Unauthorized { status, .. } | Self::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ValidationError(err.to_string())
    }
}
