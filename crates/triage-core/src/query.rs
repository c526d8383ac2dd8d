// Rust guideline compliant 2026-02-06

//! Search query construction.
//!
//! Once an inclusion list is sent, the tracker returns *only* the listed
//! fields. The query therefore always carries the tracker's default field set
//! plus the extras the report needs.

use crate::config::Config;
use serde::Serialize;

/// Fields Bugzilla returns for a search without an inclusion list.
pub const DEFAULT_FIELDS: &[&str] = &[
    "actual_time",
    "alias",
    "assigned_to",
    "assigned_to_detail",
    "blocks",
    "cc",
    "cc_detail",
    "cf_build_id",
    "cf_clone_of",
    "cf_conditional_nak",
    "cf_cust_facing",
    "cf_devel_whiteboard",
    "cf_doc_type",
    "cf_environment",
    "cf_fixed_in",
    "cf_internal_whiteboard",
    "cf_last_closed",
    "cf_partner",
    "cf_pgm_internal",
    "cf_pm_score",
    "cf_qa_whiteboard",
    "cf_qe_conditional_nak",
    "cf_release_notes",
    "cf_target_upstream_version",
    "cf_verified",
    "classification",
    "component",
    "creation_time",
    "creator",
    "creator_detail",
    "deadline",
    "depends_on",
    "docs_contact",
    "dupe_of",
    "estimated_time",
    "groups",
    "id",
    "is_cc_accessible",
    "is_confirmed",
    "is_creator_accessible",
    "is_open",
    "keywords",
    "last_change_time",
    "op_sys",
    "platform",
    "priority",
    "product",
    "qa_contact",
    "qa_contact_detail",
    "remaining_time",
    "resolution",
    "see_also",
    "severity",
    "status",
    "summary",
    "target_milestone",
    "target_release",
    "url",
    "version",
    "whiteboard",
];

/// Fields requested on top of [`DEFAULT_FIELDS`].
pub const EXTRA_FIELDS: &[&str] = &["flags", "external_bugs"];

/// Fields the triage pipeline reads from every issue.
pub const REQUIRED_FIELDS: &[&str] = &["id", "assigned_to", "severity", "status", "flags"];

/// Statuses of bugs that still need work.
pub const OPEN_STATUSES: &[&str] = &["NEW", "ASSIGNED", "POST", "ON_DEV"];

/// Target release value meaning "not set".
pub const UNSET_RELEASE: &str = "---";

/// A tracker search filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    /// Products to match.
    pub product: Vec<String>,
    /// Components to match.
    pub component: Vec<String>,
    /// Allowed statuses.
    pub status: Vec<String>,
    /// Allowed target releases.
    pub target_release: Vec<String>,
    /// Fields to populate on returned issues. Empty means tracker defaults.
    pub include_fields: Vec<String>,
}

impl Query {
    /// Builds the triage query for a deployment.
    ///
    /// # Arguments
    ///
    /// * `config` - Deployment configuration
    ///
    /// # Returns
    ///
    /// A query for open bugs of the configured product and component
    /// targeted at no release, the current release or the next one.
    pub fn from_config(config: &Config) -> Self {
        Self {
            product: vec![config.product.clone()],
            component: vec![config.component.clone()],
            status: OPEN_STATUSES.iter().map(|s| s.to_string()).collect(),
            target_release: vec![
                UNSET_RELEASE.to_string(),
                config.current_release.clone(),
                config.next_release.clone(),
            ],
            include_fields: include_fields(EXTRA_FIELDS),
        }
    }
}

/// Unions [`DEFAULT_FIELDS`], [`REQUIRED_FIELDS`] and `extras`.
///
/// Order is preserved and duplicates are dropped.
pub fn include_fields(extras: &[&str]) -> Vec<String> {
    let mut fields: Vec<String> = Vec::new();
    for field in DEFAULT_FIELDS
        .iter()
        .chain(REQUIRED_FIELDS.iter())
        .chain(extras.iter())
    {
        if !fields.iter().any(|existing| existing == field) {
            fields.push(field.to_string());
        }
    }
    fields
}
