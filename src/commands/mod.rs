//! Command implementations

mod config_cmd;
#[cfg(feature = "server")]
mod serve;
mod task;

pub use config_cmd::config_cmd;
#[cfg(feature = "server")]
pub use serve::serve;
pub use task::{add, delete, list, toggle};
