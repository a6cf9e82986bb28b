//! CLI definition for the taskboard command-line interface.
//!
//! Only depends on `clap` and `std`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Taskboard - a kanban board driven by JSON operations.
///
/// Operations are JSON objects such as `{"op": "add task", "title": "Ship"}`
/// or `{"op": "move task", "id": "1", "column": "done", "index": 0}`, one per
/// line or as a single JSON array.
#[derive(Parser, Debug)]
#[command(name = "taskboard")]
#[command(version)]
#[command(about = "Kanban board driven by JSON operations")]
#[command(
    long_about = "Taskboard applies JSON operations to an in-memory kanban board and renders \
    the result.\n\n\
    Configuration is read from ~/.config/taskboard/config.{toml,yaml,json}, then \
    ./.taskboard.{toml,yaml,json}, then TASKBOARD_* environment variables.\n\n\
    Environment variables:\n  \
    TASKBOARD_ACTOR            Actor recorded on activity entries\n  \
    TASKBOARD_START            Initial board: sample, default or empty\n  \
    TASKBOARD_CONFIRM_DELETES  prompt, yes or no\n  \
    TASKBOARD_OUTPUT           table or json"
)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Initial board
    #[arg(long, global = true, value_enum, value_name = "BOARD")]
    pub start: Option<StartArg>,

    /// Answer yes to every delete confirmation
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Actor recorded on activity entries
    #[arg(long, global = true, value_name = "NAME")]
    pub actor: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply operations from FILE (or stdin) and render the board
    Run {
        /// JSON lines or a JSON array of operations; stdin when omitted
        file: Option<PathBuf>,
        /// Also print the activity log
        #[arg(long)]
        activity: bool,
    },

    /// Render the sample board
    Demo,

    /// List the column colour presets
    Colors,
}

/// Initial board choices
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartArg {
    /// Two example tasks in the three default columns
    Sample,
    /// To Do, In Progress and Done with no tasks
    Default,
    /// No columns
    Empty,
}
