//! Tracing setup for the CLI

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Level chosen by the command line flags, `None` when no flag was given
pub fn flag_level(verbose: bool, debug: bool, quiet: bool) -> Option<Level> {
    if quiet {
        Some(Level::ERROR)
    } else if debug {
        Some(Level::DEBUG)
    } else if verbose {
        Some(Level::TRACE)
    } else {
        None
    }
}

/// Install the stderr subscriber.
///
/// Flags win over `RUST_LOG`; with neither, only warnings and errors show.
pub fn configure_logging(verbose: bool, debug: bool, quiet: bool) {
    let filter = match flag_level(verbose, debug, quiet) {
        Some(level) => EnvFilter::new(level.to_string()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    // A subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .try_init();
}
