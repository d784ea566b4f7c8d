//! Task model
//!
//! A task is a server-owned record. Its `id` is always assigned by the
//! server; the client never synthesizes one.

use serde::{Deserialize, Serialize};

/// A task as returned by the task service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque identifier assigned by the server
    pub id: String,

    /// What needs to be done (the server may have truncated it)
    pub title: String,

    /// Whether the task is done
    pub completed: bool,
}

impl Task {
    /// Create a task value (used when decoding fixtures and in tests)
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            completed,
        }
    }

    /// Accessible label for the completion checkbox
    ///
    /// Describes the action the checkbox performs, so it flips with the state.
    #[must_use]
    pub fn toggle_label(&self) -> String {
        let target = if self.completed { "incomplete" } else { "complete" };
        format!("Mark \"{}\" as {target}", self.title)
    }

    /// Accessible label for the delete button
    #[must_use]
    pub fn delete_label(&self) -> String {
        format!("Delete \"{}\"", self.title)
    }
}

/// Request body for `POST /tasks`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTask {
    /// Title to create the task with (already validated and trimmed)
    pub title: String,
}

/// Request body for `PATCH /tasks/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionPatch {
    /// New completion state
    pub completed: bool,
}
