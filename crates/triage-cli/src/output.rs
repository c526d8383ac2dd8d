// Rust guideline compliant 2026-02-06

//! Output formatting module for the triage CLI.
//!
//! This module renders a [`Report`] either as the classic plain text listing
//! or as JSON for machine consumption.

use serde_json::json;
use triage_core::{AssigneeGroup, Links, Report};

/// Report formatter trait.
pub trait ReportFormatter {
    /// Formats a whole report, including the trailing total line.
    ///
    /// # Arguments
    /// * `report` - The report to format
    ///
    /// # Returns
    /// The text to write to stdout
    fn format_report(&self, report: &Report) -> String;
}

/// Plain text formatter.
///
/// One section per assignee: a `<assignee>: <active>/<total>: <link>` line,
/// one tab-indented line per bug and a blank line. A `Total:` line closes
/// the report.
pub struct TextFormatter {
    links: Links,
}

impl TextFormatter {
    /// Creates a text formatter linking into the given tracker.
    pub fn new(links: Links) -> Self {
        Self { links }
    }

    fn format_group(&self, group: &AssigneeGroup, output: &mut String) {
        output.push_str(&format!(
            "{}: {}/{}: {}\n",
            group.assignee,
            group.active(),
            group.total(),
            self.links.buglist_url(&group.ids())
        ));

        for entry in &group.issues {
            let reason = entry
                .ignore_reason
                .as_ref()
                .map(|reason| format!("[{}]", reason))
                .unwrap_or_default();
            output.push_str(&format!(
                "\t {} {} {}\n",
                reason,
                entry.issue.status,
                self.links.show_bug_url(entry.issue.id)
            ));
        }

        output.push('\n');
    }
}

impl ReportFormatter for TextFormatter {
    fn format_report(&self, report: &Report) -> String {
        let mut output = String::new();
        for group in report.groups() {
            self.format_group(group, &mut output);
        }
        output.push_str(&format!("Total: {}/{}\n", report.active(), report.total()));
        output
    }
}

/// JSON output formatter.
pub struct JsonFormatter {
    links: Links,
}

impl JsonFormatter {
    /// Creates a JSON formatter linking into the given tracker.
    pub fn new(links: Links) -> Self {
        Self { links }
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_report(&self, report: &Report) -> String {
        let assignees: Vec<serde_json::Value> = report
            .groups()
            .iter()
            .map(|group| {
                let issues: Vec<serde_json::Value> = group
                    .issues
                    .iter()
                    .map(|entry| {
                        json!({
                            "id": entry.issue.id,
                            "severity": entry.issue.severity,
                            "status": entry.issue.status,
                            "ignored": entry.is_ignored(),
                            "ignore_reason": entry.ignore_reason.as_ref().map(ToString::to_string),
                            "url": self.links.show_bug_url(entry.issue.id),
                        })
                    })
                    .collect();

                json!({
                    "assignee": group.assignee,
                    "active": group.active(),
                    "total": group.total(),
                    "url": self.links.buglist_url(&group.ids()),
                    "issues": issues,
                })
            })
            .collect();

        let output = json!({
            "assignees": assignees,
            "active": report.active(),
            "total": report.total(),
        });
        let mut text = serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize report" }).to_string());
        text.push('\n');
        text
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("text" or "json")
/// * `links` - Link builder for the configured tracker
///
/// # Returns
/// A boxed ReportFormatter instance; unknown formats fall back to text
pub fn create_formatter(format: &str, links: Links) -> Box<dyn ReportFormatter> {
    match format {
        "json" => Box::new(JsonFormatter::new(links)),
        _ => Box::new(TextFormatter::new(links)),
    }
}
