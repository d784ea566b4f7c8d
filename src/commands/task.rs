//! Task commands - list, add, toggle, delete
//!
//! Each command opens a controller (which loads the list), runs at most one
//! action, and renders the confirmed state.

use std::path::Path;

use anyhow::{Context as _, bail};
use tasklist::api::HttpTaskApi;
use tasklist::config::ClientConfig;
use tasklist::controller::{Outcome, TaskController};
use tasklist::models::Task;
use tasklist::output::{ActionResult, OutputMode, TaskListResult};
use tasklist::validation::validate_title;
use tokio::runtime::{Builder, Runtime};

type Controller = TaskController<HttpTaskApi>;

fn runtime() -> anyhow::Result<Runtime> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}

/// Build the HTTP transport from config, applying the configured timeout
fn http_api(config_path: &Path, api_url: Option<&str>) -> anyhow::Result<HttpTaskApi> {
    let config = ClientConfig::load_from(config_path)?.with_overrides(api_url);

    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.api.timeout() {
        builder = builder.timeout(timeout);
    }
    let client = builder.build().context("Failed to build HTTP client")?;

    log::debug!("using task service at {}", config.api.base_url);
    Ok(HttpTaskApi::with_client(client, config.api.base_url))
}

/// Open a controller, failing the command when the initial load fails
async fn open(api: HttpTaskApi) -> anyhow::Result<Controller> {
    let controller = TaskController::open(api).await;
    if let Some(error) = controller.error() {
        bail!(error);
    }
    Ok(controller)
}

/// Turn an action outcome into rendered output or a command error
fn finish(
    controller: &Controller,
    outcome: Outcome,
    action: &str,
    message: String,
    task: Option<Task>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    if outcome == Outcome::Failed {
        let error = controller.error().unwrap_or_else(|| format!("failed to {action} task"));
        bail!(error);
    }

    let result = ActionResult {
        success: outcome.is_applied(),
        action: action.to_string(),
        message,
        task,
        list: TaskListResult::from(&controller.snapshot()),
    };
    result.render(mode);
    Ok(())
}

/// Show all tasks
pub fn list(config_path: &Path, api_url: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let api = http_api(config_path, api_url)?;
    let controller = runtime()?.block_on(open(api))?;

    TaskListResult::from(&controller.snapshot()).render(mode);
    Ok(())
}

/// Add a task
pub fn add(
    title: &str,
    config_path: &Path,
    api_url: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    // Reject bad titles before anything touches the network.
    let title = validate_title(title)?;
    let api = http_api(config_path, api_url)?;

    runtime()?.block_on(async {
        let controller = open(api).await?;
        let outcome = controller.add(&title).await?;

        let task = controller.tasks().last().cloned();
        let message = task
            .as_ref()
            .map_or_else(|| "Added task".to_string(), |t| format!("Added: {} ({})", t.title, t.id));
        finish(&controller, outcome, "add", message, task, mode)
    })
}

/// Flip a task's completion
pub fn toggle(
    id: &str,
    config_path: &Path,
    api_url: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let api = http_api(config_path, api_url)?;

    runtime()?.block_on(async {
        let controller = open(api).await?;
        let outcome = controller.toggle(id).await;
        if outcome == Outcome::Skipped {
            bail!("task not found: {id}");
        }

        let task = controller.snapshot().get(id).cloned();
        let message = task.as_ref().map_or_else(
            || format!("Updated: {id}"),
            |t| {
                let state = if t.completed { "complete" } else { "incomplete" };
                format!("Marked \"{}\" as {state}", t.title)
            },
        );
        finish(&controller, outcome, "update", message, task, mode)
    })
}

/// Delete a task
pub fn delete(
    id: &str,
    config_path: &Path,
    api_url: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let api = http_api(config_path, api_url)?;

    runtime()?.block_on(async {
        let controller = open(api).await?;
        let before = controller.snapshot().get(id).cloned();
        let outcome = controller.delete(id).await;

        let message = before
            .as_ref()
            .map_or_else(|| format!("Deleted: {id}"), |t| format!("Deleted \"{}\"", t.title));
        finish(&controller, outcome, "delete", message, before, mode)
    })
}
