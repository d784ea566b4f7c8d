//! `reqwest` adapter for [`TaskApi`]

use log::debug;
use reqwest::{Client, Response};

use crate::models::{CompletionPatch, CreateTask, Task};

use super::{ApiError, TaskApi};

/// HTTP client for a task service rooted at `base_url`
///
/// The collection lives at `{base_url}/tasks`. Timeouts, if any, belong to the
/// [`Client`] handed to [`HttpTaskApi::with_client`].
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    client: Client,
    base_url: String,
}

impl HttpTaskApi {
    /// Create a client with default `reqwest` settings
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client on top of a preconfigured [`Client`]
    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// The base URL requests are made against (no trailing slash)
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/tasks/{id}", self.base_url)
    }
}

/// Map a non-success status to the operation's failure kind
fn ensure_success(
    response: Response,
    failure: impl FnOnce(u16) -> ApiError,
) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        debug!("{} -> {status}", response.url());
        Err(failure(status.as_u16()))
    }
}

impl TaskApi for HttpTaskApi {
    async fn list(&self) -> Result<Vec<Task>, ApiError> {
        let url = self.collection_url();
        debug!("GET {url}");

        let response = self.client.get(&url).send().await?;
        let response = ensure_success(response, |status| ApiError::Fetch { status })?;
        Ok(response.json().await?)
    }

    async fn create(&self, title: &str) -> Result<Task, ApiError> {
        let url = self.collection_url();
        debug!("POST {url}");

        let body = CreateTask {
            title: title.to_string(),
        };
        let response = self.client.post(&url).json(&body).send().await?;
        let response = ensure_success(response, |status| ApiError::Create { status })?;
        Ok(response.json().await?)
    }

    async fn remove(&self, id: &str) -> Result<(), ApiError> {
        let url = self.item_url(id);
        debug!("DELETE {url}");

        let response = self.client.delete(&url).send().await?;
        ensure_success(response, |status| ApiError::Delete { status })?;
        Ok(())
    }

    async fn set_completion(&self, id: &str, completed: bool) -> Result<Task, ApiError> {
        let url = self.item_url(id);
        debug!("PATCH {url}");

        let body = CompletionPatch { completed };
        let response = self.client.patch(&url).json(&body).send().await?;
        let response = ensure_success(response, |status| ApiError::Update { status })?;
        Ok(response.json().await?)
    }
}
