//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::fmt::Write as _;

use serde::Serialize;

use crate::controller::Snapshot;
use crate::models::Task;

/// Shown while a load is in flight
pub const LOADING_TEXT: &str = "Loading tasks...";

/// Shown when the confirmed list is empty
pub const EMPTY_TEXT: &str = "No tasks yet. Add one above!";

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Rendered view of the controller state
#[derive(Debug, Clone, Serialize)]
pub struct TaskListResult {
    /// Confirmed tasks
    pub tasks: Vec<Task>,
    /// Number of tasks
    pub total: usize,
    /// Number of completed tasks
    pub completed: usize,
    /// Whether a load was still in flight
    pub loading: bool,
    /// Error banner, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&Snapshot> for TaskListResult {
    fn from(snapshot: &Snapshot) -> Self {
        Self {
            total: snapshot.tasks.len(),
            completed: snapshot.tasks.iter().filter(|t| t.completed).count(),
            tasks: snapshot.tasks.clone(),
            loading: snapshot.loading,
            error: snapshot.error.clone(),
        }
    }
}

impl TaskListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable rendering, one line per task
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();

        if self.loading {
            let _ = writeln!(out, "{LOADING_TEXT}");
            return out;
        }

        if let Some(error) = &self.error {
            let _ = writeln!(out, "Error: {error}");
        }

        if self.tasks.is_empty() {
            let _ = writeln!(out, "{EMPTY_TEXT}");
            return out;
        }

        let id_width = self.tasks.iter().map(|t| t.id.len()).max().unwrap_or(0);
        for task in &self.tasks {
            let mark = if task.completed { 'x' } else { ' ' };
            let _ = writeln!(out, "[{mark}] {:<id_width$}  {}", task.id, task.title);
        }
        let _ = writeln!(out, "\n{} task(s), {} completed", self.total, self.completed);
        out
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of a single controller action (add, toggle, delete)
#[derive(Debug, Clone, Serialize)]
pub struct ActionResult {
    /// Whether the server confirmed the change
    pub success: bool,
    /// Action name
    pub action: String,
    /// Human-readable summary
    pub message: String,
    /// The task the action was about, as last confirmed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
    /// State of the list after the action
    pub list: TaskListResult,
}

impl ActionResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("{}\n", self.message);
                print!("{}", self.list.to_human());
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
