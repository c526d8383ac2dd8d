// Rust guideline compliant 2026-02-06

//! Grouping and ordering of classified issues per assignee.

use crate::models::ClassifiedIssue;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Orders issues within an assignee's bucket.
///
/// Active issues come before ignored ones, then lower severity rank first,
/// then lower ID first. Since IDs are unique this is a total order.
pub fn compare_issues(a: &ClassifiedIssue, b: &ClassifiedIssue) -> Ordering {
    a.is_ignored()
        .cmp(&b.is_ignored())
        .then_with(|| a.issue.severity.rank().cmp(&b.issue.severity.rank()))
        .then_with(|| a.issue.id.cmp(&b.issue.id))
}

/// All issues of one assignee, sorted with [`compare_issues`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssigneeGroup {
    /// Assignee login; empty for unassigned issues.
    pub assignee: String,
    /// Issues in report order.
    pub issues: Vec<ClassifiedIssue>,
}

impl AssigneeGroup {
    /// Number of issues in the group.
    #[must_use]
    pub fn total(&self) -> usize {
        self.issues.len()
    }

    /// Number of ignored issues in the group.
    #[must_use]
    pub fn ignored(&self) -> usize {
        self.issues.iter().filter(|i| i.is_ignored()).count()
    }

    /// Number of issues still needing work.
    #[must_use]
    pub fn active(&self) -> usize {
        self.total() - self.ignored()
    }

    /// Issue IDs in report order.
    #[must_use]
    pub fn ids(&self) -> Vec<u64> {
        self.issues.iter().map(|i| i.issue.id).collect()
    }
}

/// The per-assignee triage report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    groups: Vec<AssigneeGroup>,
}

impl Report {
    /// Groups issues by exact assignee and sorts everything.
    ///
    /// Groups come out in ascending byte-wise order of the assignee string.
    pub fn build(issues: Vec<ClassifiedIssue>) -> Self {
        let mut buckets: BTreeMap<String, Vec<ClassifiedIssue>> = BTreeMap::new();
        for issue in issues {
            buckets
                .entry(issue.issue.assignee.clone())
                .or_default()
                .push(issue);
        }

        let groups = buckets
            .into_iter()
            .map(|(assignee, mut issues)| {
                issues.sort_by(compare_issues);
                AssigneeGroup { assignee, issues }
            })
            .collect();

        Self { groups }
    }

    /// Groups in report order.
    #[must_use]
    pub fn groups(&self) -> &[AssigneeGroup] {
        &self.groups
    }

    /// Number of issues across all groups.
    #[must_use]
    pub fn total(&self) -> usize {
        self.groups.iter().map(AssigneeGroup::total).sum()
    }

    /// Number of ignored issues across all groups.
    #[must_use]
    pub fn ignored(&self) -> usize {
        self.groups.iter().map(AssigneeGroup::ignored).sum()
    }

    /// Number of active issues across all groups.
    #[must_use]
    pub fn active(&self) -> usize {
        self.total() - self.ignored()
    }
}
