// Rust guideline compliant 2026-02-06

//! Core data models for bug triage.

use crate::classify::IgnoreReason;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Severity of an issue as reported by the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    /// Needs attention right away.
    Urgent,
    /// High impact.
    High,
    /// Severity not set (`---`).
    #[default]
    Unspecified,
    /// Medium impact.
    Medium,
    /// Low impact; always ignored by triage.
    Low,
    /// Any value outside the known enumeration, kept verbatim.
    Other(String),
}

impl Severity {
    /// Returns the ordering rank used within an assignee's bucket.
    ///
    /// Known severities rank 1 (urgent) through 5 (low); unknown values rank 0.
    #[must_use]
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Urgent => 1,
            Severity::High => 2,
            Severity::Unspecified => 3,
            Severity::Medium => 4,
            Severity::Low => 5,
            Severity::Other(_) => 0,
        }
    }

    /// Returns the tracker's string for this severity.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Urgent => "urgent",
            Severity::High => "high",
            Severity::Unspecified => "---",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Other(value) => value,
        }
    }
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        match value.as_str() {
            "urgent" => Severity::Urgent,
            "high" => Severity::High,
            "---" => Severity::Unspecified,
            "medium" => Severity::Medium,
            "low" => Severity::Low,
            _ => Severity::Other(value),
        }
    }
}

impl From<&str> for Severity {
    fn from(value: &str) -> Self {
        Severity::from(value.to_string())
    }
}

impl From<Severity> for String {
    fn from(value: Severity) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pending request attached to an issue, such as `needinfo`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Flag {
    /// Flag name.
    #[serde(default)]
    pub name: String,
    /// Person the request is directed at; empty when unset.
    #[serde(default)]
    pub requestee: String,
}

impl Flag {
    /// Creates a flag with the given name and requestee.
    pub fn new(name: impl Into<String>, requestee: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requestee: requestee.into(),
        }
    }
}

/// A single issue as returned by the tracker.
///
/// Field names follow the Bugzilla REST API. Only the fields requested through
/// the query's inclusion list are populated, so all of them default.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Issue {
    /// Numeric issue identifier.
    #[serde(default)]
    pub id: u64,
    /// Assignee login; empty means unassigned.
    #[serde(default, rename = "assigned_to")]
    pub assignee: String,
    /// Issue severity.
    #[serde(default)]
    pub severity: Severity,
    /// Workflow status, e.g. `NEW` or `POST`.
    #[serde(default)]
    pub status: String,
    /// Flags in tracker order.
    #[serde(default)]
    pub flags: Vec<Flag>,
}

/// An issue together with its triage verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedIssue {
    /// The classified issue.
    pub issue: Issue,
    /// Why the issue is ignored; `None` for active issues.
    pub ignore_reason: Option<IgnoreReason>,
}

impl ClassifiedIssue {
    /// Returns true if the issue is excluded from the active count.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        self.ignore_reason.is_some()
    }
}

/// The set of people considered internal to the team.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Team {
    members: BTreeSet<String>,
}

impl Team {
    /// Builds a team from member identifiers. Empty identifiers are dropped.
    pub fn new<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            members: members
                .into_iter()
                .map(Into::into)
                .filter(|member: &String| !member.is_empty())
                .collect(),
        }
    }

    /// Returns true if `person` is a team member. The empty string never is.
    #[must_use]
    pub fn contains(&self, person: &str) -> bool {
        !person.is_empty() && self.members.contains(person)
    }

    /// Iterates over members in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the team has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
