//! In-memory task storage behind the reference server

use crate::models::Task;

use super::ServerError;

/// Longest title the server keeps; longer titles are cut, not rejected
pub const MAX_TITLE_CHARS: usize = 64;

/// Ordered, in-memory task collection with server-assigned ids
#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskBoard {
    /// Create an empty board
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board seeded with existing tasks
    ///
    /// New ids continue after the largest numeric id present.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().filter_map(|t| t.id.parse::<u64>().ok()).max().unwrap_or(0);
        Self { tasks, next_id }
    }

    /// All tasks, in insertion order
    #[must_use]
    pub fn list(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Number of stored tasks
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the board holds no tasks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Store a new task, trimming and truncating its title
    pub fn create(&mut self, title: &str) -> Result<Task, ServerError> {
        let title: String = title.trim().chars().take(MAX_TITLE_CHARS).collect();
        if title.is_empty() {
            return Err(ServerError::BadRequest("Task title cannot be empty".to_string()));
        }

        self.next_id += 1;
        let task = Task::new(self.next_id.to_string(), title, false);
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Set a task's completion flag
    pub fn set_completion(&mut self, id: &str, completed: bool) -> Result<Task, ServerError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| ServerError::TaskNotFound(id.to_string()))?;
        task.completed = completed;
        Ok(task.clone())
    }

    /// Delete a task
    pub fn remove(&mut self, id: &str) -> Result<(), ServerError> {
        let pos = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| ServerError::TaskNotFound(id.to_string()))?;
        self.tasks.remove(pos);
        Ok(())
    }
}
