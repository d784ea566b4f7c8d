//! Data models for tasklist
//!
//! - Task: the server-owned record the whole client revolves around
//! - `CreateTask` / `CompletionPatch`: the JSON bodies sent to the service

pub mod task;

pub use task::{CompletionPatch, CreateTask, Task};
