//! Transport error types
//!
//! Each operation has its own failure kind with a fixed message. Anything the
//! transport itself could not complete (connection refused, undecodable
//! body) is reported as a generic [`ApiError::Request`].

use thiserror::Error;

/// Failure of a single call against the task service
#[derive(Debug, Error)]
pub enum ApiError {
    /// `GET /tasks` answered with a non-success status
    #[error("Failed to fetch tasks")]
    Fetch {
        /// HTTP status returned by the server
        status: u16,
    },

    /// `POST /tasks` answered with a non-success status
    #[error("Failed to create task")]
    Create {
        /// HTTP status returned by the server
        status: u16,
    },

    /// `DELETE /tasks/{id}` answered with a non-success status
    #[error("Failed to delete task")]
    Delete {
        /// HTTP status returned by the server
        status: u16,
    },

    /// `PATCH /tasks/{id}` answered with a non-success status
    #[error("Failed to update task")]
    Update {
        /// HTTP status returned by the server
        status: u16,
    },

    /// The request could not be sent or its body could not be decoded
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl ApiError {
    /// HTTP status carried by a non-success response, if any
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Fetch { status }
            | Self::Create { status }
            | Self::Delete { status }
            | Self::Update { status } => Some(*status),
            Self::Request(_) => None,
        }
    }

    /// Stable code for machine-readable output
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Fetch { .. } => "FETCH_FAILED",
            Self::Create { .. } => "CREATE_FAILED",
            Self::Delete { .. } => "DELETE_FAILED",
            Self::Update { .. } => "UPDATE_FAILED",
            Self::Request(_) => "REQUEST_FAILED",
        }
    }
}
