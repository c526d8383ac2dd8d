// Rust guideline compliant 2026-02-06

//! Triage rules deciding which issues are left out of the active count.

use crate::models::{ClassifiedIssue, Issue, Severity, Team};
use std::fmt;

/// Flag name used for information requests.
pub const NEEDINFO: &str = "needinfo";

/// Why an issue was ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// The issue has low severity.
    Low,
    /// Information was requested from someone outside the team.
    NeedInfo(String),
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreReason::Low => f.write_str("low"),
            IgnoreReason::NeedInfo(requestee) => write!(f, "{}:{}", NEEDINFO, requestee),
        }
    }
}

/// Classifies a single issue.
///
/// Rules are checked in order and the first match wins:
/// 1. Low severity is ignored, whatever flags are set.
/// 2. The first `needinfo` flag whose requestee is not on the team ignores
///    the issue. An empty requestee is never on the team.
/// 3. Anything else is active.
///
/// # Arguments
///
/// * `issue` - The issue to classify
/// * `team` - Internal team members
///
/// # Returns
///
/// `Some(reason)` for ignored issues, `None` for active ones.
pub fn classify(issue: &Issue, team: &Team) -> Option<IgnoreReason> {
    if issue.severity == Severity::Low {
        return Some(IgnoreReason::Low);
    }

    issue
        .flags
        .iter()
        .find(|flag| flag.name == NEEDINFO && !team.contains(&flag.requestee))
        .map(|flag| IgnoreReason::NeedInfo(flag.requestee.clone()))
}

/// Classifies every issue, keeping fetch order.
pub fn classify_all(issues: Vec<Issue>, team: &Team) -> Vec<ClassifiedIssue> {
    issues
        .into_iter()
        .map(|issue| {
            let ignore_reason = classify(&issue, team);
            match &ignore_reason {
                Some(reason) => tracing::debug!(id = issue.id, %reason, "ignoring bug"),
                None => tracing::debug!(id = issue.id, "active bug"),
            }
            ClassifiedIssue {
                issue,
                ignore_reason,
            }
        })
        .collect()
}
