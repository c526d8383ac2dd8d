// Rust guideline compliant 2026-02-06

//! Bug triage CLI library.
//!
//! This library exposes the report pipeline and formatters for use in tests
//! and by the `bug-triage` binary.

pub mod logging;
pub mod output;

pub use output::{create_formatter, JsonFormatter, ReportFormatter, TextFormatter};

use std::io::Write;
use triage_core::{triage, Config, Query, Report, Tracker};

/// Fetches, classifies and groups the bugs for a deployment.
///
/// # Arguments
///
/// * `tracker` - Tracker to search
/// * `config` - Deployment configuration
///
/// # Returns
///
/// The sorted per-assignee report.
///
/// # Errors
///
/// Returns an error if the tracker search fails. No partial report is built.
pub fn generate_report(tracker: &dyn Tracker, config: &Config) -> triage_core::Result<Report> {
    let query = Query::from_config(config);
    let issues = tracker.search(&query)?;
    tracing::debug!(count = issues.len(), "classifying bugs");
    Ok(triage(issues, &config.team()))
}

/// Writes a rendered report and flushes `out`.
///
/// # Errors
///
/// Returns the writer's error, e.g. `BrokenPipe` when stdout was closed early.
pub fn write_report<W: Write>(mut out: W, rendered: &str) -> std::io::Result<()> {
    out.write_all(rendered.as_bytes())?;
    out.flush()
}
