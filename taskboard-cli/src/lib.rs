//! Terminal front end for the taskboard engine.
//!
//! The binary reads JSON operations, applies them through the engine's
//! processor and renders the board with `comfy-table`.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod render;
pub mod session;

pub use cli::{Cli, Commands, StartArg};
pub use config::{OutputFormat, TaskboardConfig};
pub use error::{CliError, CliResult, ConfigError};
pub use prompt::ConfirmPolicy;
