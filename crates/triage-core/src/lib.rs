// Rust guideline compliant 2026-02-06

//! Bug Triage Core Library
//!
//! This crate provides the tracker-independent parts of the triage report:
//! - Data models (Issue, Flag, Severity, Team)
//! - Configuration loading (TOML file and environment overrides)
//! - Query construction and the pinned field-inclusion list
//! - The `Tracker` seam used to fetch issues
//! - Classification rules and the per-assignee report
//! - Error types and result handling

pub mod classify;
pub mod config;
pub mod error;
pub mod links;
pub mod models;
pub mod query;
pub mod report;
pub mod tracker;

pub use classify::{classify, classify_all, IgnoreReason};
pub use config::Config;
pub use error::{Error, Result};
pub use links::Links;
pub use models::{ClassifiedIssue, Flag, Issue, Severity, Team};
pub use query::{Query, DEFAULT_FIELDS, EXTRA_FIELDS, REQUIRED_FIELDS};
pub use report::{compare_issues, AssigneeGroup, Report};
pub use tracker::Tracker;

/// Runs the classify, group and sort stages over fetched issues.
///
/// # Arguments
///
/// * `issues` - Issues in fetch order
/// * `team` - Internal team members
///
/// # Returns
///
/// The grouped and sorted report.
pub fn triage(issues: Vec<Issue>, team: &Team) -> Report {
    Report::build(classify_all(issues, team))
}
