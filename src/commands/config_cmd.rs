//! Config command - inspect and change client configuration

use std::path::Path;

use tasklist::config::ClientConfig;
use tasklist::output::{OperationResult, OutputMode};

use crate::cli::ConfigAction;

/// Handle config subcommands
pub fn config_cmd(
    action: ConfigAction,
    config_path: &Path,
    api_url: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => show(config_path, api_url, mode),
        ConfigAction::SetUrl { url } => set_url(&url, config_path, mode),
    }
}

fn show(config_path: &Path, api_url: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let config = ClientConfig::load_from(config_path)?.with_overrides(api_url);

    if mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({
                "path": config_path.to_string_lossy(),
                "api": config.api,
            })
        );
    } else {
        println!("# {}", config_path.display());
        print!("{}", toml::to_string_pretty(&config)?);
    }

    Ok(())
}

fn set_url(url: &str, config_path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let url = url.trim();
    if url.is_empty() {
        anyhow::bail!("URL cannot be empty");
    }

    // Only file values are persisted; flag and env overrides are left out.
    let mut config = ClientConfig::load_from(config_path)?;
    config.api.base_url = url.to_string();
    config.save_to(config_path)?;

    OperationResult {
        success: true,
        message: format!("Task service set to {url}"),
    }
    .render(mode);
    Ok(())
}
