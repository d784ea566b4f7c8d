//! Task store controller
//!
//! [`TaskController`] owns the in-memory task list and is the only thing that
//! mutates it. Every mutation is confirm-then-apply: the list changes only
//! after the server has answered, so it always equals the last loaded
//! snapshot plus confirmed changes. Failures never escape the controller;
//! they become a banner message and leave the list untouched.
//!
//! Actions take `&self` and never hold the state lock across a request, so
//! several may be in flight at once. Each completion reconciles using only
//! the id it was started with, which keeps out-of-order completions from
//! touching unrelated entries.

mod state;

use std::sync::{Mutex, PoisonError};

use log::{debug, warn};

use crate::api::TaskApi;
use crate::form::TaskForm;
use crate::models::Task;
use crate::validation::{ValidationError, validate_title};

use state::State;
pub use state::{ADD_FAILED, DELETE_FAILED, LOAD_FAILED, Outcome, Phase, Snapshot, UPDATE_FAILED};

/// Owner of the confirmed task list
#[derive(Debug)]
pub struct TaskController<A> {
    api: A,
    state: Mutex<State>,
}

impl<A: TaskApi> TaskController<A> {
    /// Create a controller in the `Loading` phase without contacting the server
    ///
    /// Most callers want [`TaskController::open`], which also runs the load.
    #[must_use]
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: Mutex::new(State {
                loading: true,
                ..State::default()
            }),
        }
    }

    /// Create a controller and run the initial load
    pub async fn open(api: A) -> Self {
        let controller = Self::new(api);
        controller.load().await;
        controller
    }

    /// The transport this controller talks to
    #[must_use]
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Copy of the current state
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.with_state(|s| s.snapshot())
    }

    /// Copy of the confirmed task list
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.with_state(|s| s.tasks.clone())
    }

    /// Current error banner, if any
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.with_state(|s| s.error.clone())
    }

    /// Whether a load is in flight
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.with_state(|s| s.loading)
    }

    /// Current lifecycle phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.with_state(|s| s.phase())
    }

    /// Replace the list with the server's
    ///
    /// Clears the banner first. On failure the list keeps whatever it held.
    pub async fn load(&self) -> Outcome {
        self.with_state(|s| {
            s.loading = true;
            s.error = None;
        });

        let result = self.api.list().await;

        self.with_state(|s| {
            s.loading = false;
            match result {
                Ok(tasks) => {
                    debug!("loaded {} task(s)", tasks.len());
                    s.tasks = tasks;
                    Outcome::Applied
                },
                Err(err) => {
                    warn!("{LOAD_FAILED}: {err}");
                    s.error = Some(LOAD_FAILED.to_string());
                    Outcome::Failed
                },
            }
        })
    }

    /// Validate a title and create the task on the server
    ///
    /// A validation failure is returned to the caller untouched: no request
    /// is made and the controller banner is left alone.
    pub async fn add(&self, raw_title: &str) -> Result<Outcome, ValidationError> {
        let title = validate_title(raw_title)?;

        let outcome = match self.api.create(&title).await {
            Ok(task) => self.with_state(|s| {
                debug!("created task {}", task.id);
                s.tasks.push(task);
                s.error = None;
                Outcome::Applied
            }),
            Err(err) => {
                warn!("{ADD_FAILED}: {err}");
                self.fail(ADD_FAILED);
                Outcome::Failed
            },
        };
        Ok(outcome)
    }

    /// Submit the add-task form
    ///
    /// The form validates and keeps its own error; only a valid title reaches
    /// the server.
    pub async fn submit(&self, form: &mut TaskForm) -> Outcome {
        let Some(title) = form.submit() else {
            return Outcome::Skipped;
        };
        self.add(&title).await.unwrap_or(Outcome::Skipped)
    }

    /// Flip a task's completion on the server, then mirror the answer
    ///
    /// Unknown ids are ignored. The entry is never flipped before the server
    /// confirms.
    pub async fn toggle(&self, id: &str) -> Outcome {
        let current = self.with_state(|s| s.tasks.iter().find(|t| t.id == id).map(|t| t.completed));
        let Some(completed) = current else {
            debug!("toggle: no task with id {id}");
            return Outcome::Skipped;
        };

        match self.api.set_completion(id, !completed).await {
            Ok(updated) => self.with_state(|s| {
                // The task may have been deleted while the request was in flight.
                if let Some(slot) = s.tasks.iter_mut().find(|t| t.id == id) {
                    *slot = updated;
                }
                s.error = None;
                Outcome::Applied
            }),
            Err(err) => {
                warn!("{UPDATE_FAILED}: {err}");
                self.fail(UPDATE_FAILED);
                Outcome::Failed
            },
        }
    }

    /// Delete a task on the server, then drop it from the list
    ///
    /// Ids missing from the list are still sent; at most one entry is removed.
    pub async fn delete(&self, id: &str) -> Outcome {
        match self.api.remove(id).await {
            Ok(()) => self.with_state(|s| {
                if let Some(pos) = s.tasks.iter().position(|t| t.id == id) {
                    s.tasks.remove(pos);
                }
                s.error = None;
                Outcome::Applied
            }),
            Err(err) => {
                warn!("{DELETE_FAILED}: {err}");
                self.fail(DELETE_FAILED);
                Outcome::Failed
            },
        }
    }

    fn fail(&self, message: &str) {
        self.with_state(|s| s.error = Some(message.to_string()));
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut State) -> R) -> R {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }
}
