// Rust guideline compliant 2026-02-06

//! Diagnostic logging to stderr.

use tracing::Level;
use tracing_subscriber::fmt;

/// Returns the log level for the `--verbose` switch.
#[must_use]
pub fn level_for(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init_tracing(verbose: bool) {
    let subscriber = fmt()
        .with_max_level(level_for(verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
