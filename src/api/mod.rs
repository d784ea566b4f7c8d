//! Task service access
//!
//! [`TaskApi`] is the port the controller talks to: one method per REST
//! operation, each a single round trip with no retry. [`HttpTaskApi`] is the
//! `reqwest` implementation used by the CLI; tests substitute their own.
//!
//! ## Resource contract
//!
//! | Operation        | Method | Path          | Body                  |
//! |------------------|--------|---------------|-----------------------|
//! | `list`           | GET    | `/tasks`      | none                  |
//! | `create`         | POST   | `/tasks`      | `{"title": …}`        |
//! | `remove`         | DELETE | `/tasks/{id}` | none                  |
//! | `set_completion` | PATCH  | `/tasks/{id}` | `{"completed": …}`    |

mod error;
mod http;

use crate::models::Task;

pub use error::ApiError;
pub use http::HttpTaskApi;

/// Remote task store
///
/// Implementations translate every non-success response into the matching
/// [`ApiError`] kind and must not retry or time out on their own.
pub trait TaskApi: Send + Sync {
    /// Fetch every task, in server order
    fn list(&self) -> impl Future<Output = Result<Vec<Task>, ApiError>> + Send;

    /// Create a task; the returned task carries the server's id and title
    fn create(&self, title: &str) -> impl Future<Output = Result<Task, ApiError>> + Send;

    /// Delete a task by id
    fn remove(&self, id: &str) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// Set a task's completion flag, returning the updated task
    fn set_completion(
        &self,
        id: &str,
        completed: bool,
    ) -> impl Future<Output = Result<Task, ApiError>> + Send;
}
