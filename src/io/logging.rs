//! Diagnostic logging on stderr

use tracing::Level;

/// Verbosity selected by the quiet and verbose flags
///
/// Quiet wins when both are set.
pub const fn log_level(quiet: bool, verbose: bool) -> Level {
    if quiet {
        Level::WARN
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Install the global fmt subscriber writing to stderr
///
/// Returns `false` if a global subscriber was already installed, in which
/// case the existing one keeps receiving events.
pub fn init_logging(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
#[path = "../../tests/unit/io/logging.rs"]
mod tests;
