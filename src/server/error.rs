//! Server-side errors with HTTP status mapping

use serde::Serialize;
use thiserror::Error;

/// Error answered by the reference server
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServerError {
    /// No task with this id (404)
    #[error("task '{0}' not found")]
    TaskNotFound(String),

    /// Malformed body or empty title (400)
    #[error("{0}")]
    BadRequest(String),

    /// Unknown method/path combination (404)
    #[error("no route for {method} {path}")]
    NoRoute {
        /// Request method
        method: String,
        /// Request path
        path: String,
    },
}

impl ServerError {
    /// HTTP status for this error
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::TaskNotFound(_) | Self::NoRoute { .. } => 404,
            Self::BadRequest(_) => 400,
        }
    }

    /// Error code string sent in the body
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::TaskNotFound(_) | Self::NoRoute { .. } => "NOT_FOUND",
            Self::BadRequest(_) => "BAD_REQUEST",
        }
    }
}

/// JSON body sent with error responses
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Error code string
    pub code: &'static str,
    /// Human-readable message
    pub message: String,
}

impl From<&ServerError> for ErrorBody {
    fn from(err: &ServerError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
        }
    }
}
