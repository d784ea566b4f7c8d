//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use tasklist::output::OutputMode;

/// tasklist - keep a task list in step with a task service
#[derive(Parser, Debug)]
#[command(
    name = "tasklist",
    version,
    about = "Task list client for a REST task service",
    long_about = "List, add, toggle and delete tasks on a REST task service.\n\n\
                  Changes are shown only after the service confirms them;\n\
                  a failed request leaves the list exactly as it was."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Task service base URL (overrides config and TASKLIST_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show all tasks
    List,

    /// Add a task
    Add {
        /// Task title (at least 3 characters)
        title: String,
    },

    /// Flip a task between complete and incomplete
    Toggle {
        /// Task ID
        id: String,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },

    /// Run the in-memory reference task service
    #[cfg(feature = "server")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 3000)]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Store the task service base URL
    SetUrl {
        /// Base URL; tasks live at <URL>/tasks
        url: String,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config_path = cli.config.clone().unwrap_or_else(tasklist::config::ClientConfig::config_path);
    let api_url = cli.api_url.as_deref();

    match cli.command {
        Some(Command::List) => commands::list(&config_path, api_url, output_mode),
        Some(Command::Add { title }) => commands::add(&title, &config_path, api_url, output_mode),
        Some(Command::Toggle { id }) => commands::toggle(&id, &config_path, api_url, output_mode),
        Some(Command::Delete { id }) => commands::delete(&id, &config_path, api_url, output_mode),
        #[cfg(feature = "server")]
        Some(Command::Serve { port, host }) => commands::serve(&host, port, output_mode),
        Some(Command::Config { action }) => {
            commands::config_cmd(action, &config_path, api_url, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("tasklist v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("tasklist v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'tasklist --help' for usage");
                println!("Run 'tasklist list' to see your tasks");
            }
            Ok(())
        },
    }
}
