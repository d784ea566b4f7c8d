//! Controller state and the read-only view handed to presentation

use serde::Serialize;

use crate::models::Task;

/// Banner shown when the initial (or retried) load fails
pub const LOAD_FAILED: &str = "failed to load tasks";
/// Banner shown when the server rejects a create
pub const ADD_FAILED: &str = "failed to add task";
/// Banner shown when the server rejects a completion change
pub const UPDATE_FAILED: &str = "failed to update task";
/// Banner shown when the server rejects a delete
pub const DELETE_FAILED: &str = "failed to delete task";

/// Lifecycle phase of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// A load is in flight
    Loading,
    /// The list reflects confirmed server state and no error is shown
    Ready,
    /// The last operation failed; the list is unchanged
    ReadyWithError,
}

/// Result of a controller action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The server confirmed the change and the list was updated
    Applied,
    /// Nothing was sent to the server
    Skipped,
    /// The server call failed; the list kept its last confirmed state
    Failed,
}

impl Outcome {
    /// Whether the action changed confirmed state
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Mutable state owned by the controller
#[derive(Debug, Default)]
pub(super) struct State {
    pub(super) tasks: Vec<Task>,
    pub(super) loading: bool,
    pub(super) error: Option<String>,
}

impl State {
    pub(super) const fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::ReadyWithError
        } else {
            Phase::Ready
        }
    }

    pub(super) fn snapshot(&self) -> Snapshot {
        Snapshot {
            tasks: self.tasks.clone(),
            loading: self.loading,
            error: self.error.clone(),
            phase: self.phase(),
        }
    }
}

/// Immutable copy of the controller state at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Confirmed tasks, in list order
    pub tasks: Vec<Task>,
    /// Whether a load is in flight
    pub loading: bool,
    /// User-facing error banner, if the last operation failed
    pub error: Option<String>,
    /// Lifecycle phase derived from the fields above
    pub phase: Phase,
}

impl Snapshot {
    /// Whether there are no tasks to show
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Look a task up by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }
}
