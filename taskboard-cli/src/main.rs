//! Taskboard CLI - a kanban board driven by JSON operations.
//!
//! Commands:
//! - `taskboard run [FILE]`: apply operations from FILE or stdin, then render the board
//! - `taskboard demo`: render the sample board
//! - `taskboard colors`: list the column colour presets
//!
//! Environment variables:
//! - TASKBOARD_ACTOR, TASKBOARD_START, TASKBOARD_CONFIRM_DELETES, TASKBOARD_OUTPUT
//! - RUST_LOG: log filter when no logging flag is given
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use clap::Parser;
use taskboard_cli::{app, logging, Cli, TaskboardConfig};

fn main() {
    let cli = Cli::parse();

    logging::configure_logging(cli.verbose, cli.debug, cli.quiet);

    let mut config = match TaskboardConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    config.apply_cli(&cli);

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let exit_code = match app::execute(&cli.command, &config, &mut stdout.lock(), &mut stderr.lock())
    {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    std::process::exit(exit_code);
}
