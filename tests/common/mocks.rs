//! Mock implementation of the `TaskApi` port
//!
//! Keeps a server-side task list, records every call, and can be told to
//! fail or stall individual operations.

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use tasklist::api::{ApiError, TaskApi};
use tasklist::models::Task;

/// A call received by the mock, in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(String),
    Remove(String),
    SetCompletion(String, bool),
}

#[derive(Default)]
struct Inner {
    server_tasks: Vec<Task>,
    calls: Vec<Call>,
    next_id: u32,
    fail_list: Option<u16>,
    fail_create: Option<u16>,
    fail_remove: Option<u16>,
    fail_update: Option<u16>,
    created_title: Option<String>,
    remove_delay: Option<Duration>,
    update_delays: Vec<(String, Duration)>,
}

/// Scriptable `TaskApi`
#[derive(Default)]
pub struct MockTaskApi {
    inner: Mutex<Inner>,
}

impl MockTaskApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Server already holds `tasks`
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let mock = Self::new();
        mock.lock().server_tasks = tasks;
        mock
    }

    pub fn fail_list(self, status: u16) -> Self {
        self.lock().fail_list = Some(status);
        self
    }

    pub fn fail_create(self, status: u16) -> Self {
        self.lock().fail_create = Some(status);
        self
    }

    pub fn fail_remove(self, status: u16) -> Self {
        self.lock().fail_remove = Some(status);
        self
    }

    pub fn fail_update(self, status: u16) -> Self {
        self.lock().fail_update = Some(status);
        self
    }

    /// Make later list calls fail with `status`
    pub fn break_list(&self, status: u16) {
        self.lock().fail_list = Some(status);
    }

    /// Let later calls succeed again
    pub fn recover(&self) {
        let mut inner = self.lock();
        inner.fail_list = None;
        inner.fail_create = None;
        inner.fail_remove = None;
        inner.fail_update = None;
    }

    /// Answer creates with this title instead of the requested one
    pub fn rename_created(self, title: &str) -> Self {
        self.lock().created_title = Some(title.to_string());
        self
    }

    /// Stall every remove by `delay`
    pub fn delay_remove(self, delay: Duration) -> Self {
        self.lock().remove_delay = Some(delay);
        self
    }

    /// Stall completion updates for `id` by `delay`
    pub fn delay_update(self, id: &str, delay: Duration) -> Self {
        self.lock().update_delays.push((id.to_string(), delay));
        self
    }

    /// Replace the server-side list
    pub fn set_server_tasks(&self, tasks: Vec<Task>) {
        self.lock().server_tasks = tasks;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    pub fn server_tasks(&self) -> Vec<Task> {
        self.lock().server_tasks.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap()
    }
}

async fn pause(delay: Option<Duration>) {
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
}

impl TaskApi for MockTaskApi {
    async fn list(&self) -> Result<Vec<Task>, ApiError> {
        let mut inner = self.lock();
        inner.calls.push(Call::List);
        match inner.fail_list {
            Some(status) => Err(ApiError::Fetch { status }),
            None => Ok(inner.server_tasks.clone()),
        }
    }

    async fn create(&self, title: &str) -> Result<Task, ApiError> {
        let mut inner = self.lock();
        inner.calls.push(Call::Create(title.to_string()));
        if let Some(status) = inner.fail_create {
            return Err(ApiError::Create { status });
        }

        inner.next_id += 1;
        let title = inner.created_title.clone().unwrap_or_else(|| title.to_string());
        let task = Task::new(format!("new-{}", inner.next_id), title, false);
        inner.server_tasks.push(task.clone());
        Ok(task)
    }

    async fn remove(&self, id: &str) -> Result<(), ApiError> {
        let (delay, result) = {
            let mut inner = self.lock();
            inner.calls.push(Call::Remove(id.to_string()));
            let result = match inner.fail_remove {
                Some(status) => Err(ApiError::Delete { status }),
                None => {
                    inner.server_tasks.retain(|t| t.id != id);
                    Ok(())
                },
            };
            (inner.remove_delay, result)
        };
        pause(delay).await;
        result
    }

    async fn set_completion(&self, id: &str, completed: bool) -> Result<Task, ApiError> {
        let (delay, result) = {
            let mut inner = self.lock();
            inner.calls.push(Call::SetCompletion(id.to_string(), completed));
            let delay = inner.update_delays.iter().find(|(d, _)| d == id).map(|(_, d)| *d);
            let result = match inner.fail_update {
                Some(status) => Err(ApiError::Update { status }),
                None => {
                    let title = inner
                        .server_tasks
                        .iter_mut()
                        .find(|t| t.id == id)
                        .map(|t| {
                            t.completed = completed;
                            t.title.clone()
                        })
                        .unwrap_or_default();
                    Ok(Task::new(id, title, completed))
                },
            };
            (delay, result)
        };
        pause(delay).await;
        result
    }
}
