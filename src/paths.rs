//! Centralized path definitions for tasklist
//!
//! ## Storage Layout
//!
//! ```text
//! <config dir>/tasklist/
//! └── config.toml               # Service URL, request timeout
//! ```
//!
//! `<config dir>` is the platform config directory (`~/.config` on Linux).

use std::path::PathBuf;

/// Config directory name under the platform config directory
const CONFIG_DIR: &str = "tasklist";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Get the tasklist config directory.
///
/// Falls back to `./.tasklist` when the platform has no config directory.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir().map_or_else(|| PathBuf::from(".tasklist"), |dir| dir.join(CONFIG_DIR))
}

/// Get the config file path.
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}
