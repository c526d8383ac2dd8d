// Rust guideline compliant 2026-02-06

//! End-to-end report tests against an in-memory tracker.

use std::cell::RefCell;
use std::io::{ErrorKind, Write};
use triage_cli::{create_formatter, generate_report, write_report};
use triage_core::{Config, Error, Flag, Issue, Query, Severity, Tracker};

/// Tracker answering every search with a fixed list and recording queries.
struct FakeTracker {
    issues: Vec<Issue>,
    queries: RefCell<Vec<Query>>,
}

impl FakeTracker {
    fn new(issues: Vec<Issue>) -> Self {
        Self {
            issues,
            queries: RefCell::new(Vec::new()),
        }
    }
}

impl Tracker for FakeTracker {
    fn search(&self, query: &Query) -> triage_core::Result<Vec<Issue>> {
        self.queries.borrow_mut().push(query.clone());
        Ok(self.issues.clone())
    }
}

/// Tracker whose searches always fail.
struct FailingTracker;

impl Tracker for FailingTracker {
    fn search(&self, _query: &Query) -> triage_core::Result<Vec<Issue>> {
        Err(Error::tracker(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }
}

/// Writer behaving like a pipe whose reader has gone away.
struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn issue(id: u64, assignee: &str, severity: &str, status: &str, flags: Vec<Flag>) -> Issue {
    Issue {
        id,
        assignee: assignee.to_string(),
        severity: Severity::from(severity),
        status: status.to_string(),
        flags,
    }
}

fn config(team: &[&str]) -> Config {
    Config {
        team: team.iter().map(|m| m.to_string()).collect(),
        ..Config::default()
    }
}

fn render(issues: Vec<Issue>, team: &[&str], format: &str) -> String {
    let config = config(team);
    let tracker = FakeTracker::new(issues);
    let report = generate_report(&tracker, &config).expect("fake tracker never fails");
    create_formatter(format, config.links()).format_report(&report)
}

#[test]
fn test_empty_result_prints_zero_total() {
    let output = render(Vec::new(), &["alice"], "text");
    assert_eq!(output, "Total: 0/0\n");
}

#[test]
fn test_text_report_layout() {
    let issues = vec![
        issue(103, "bob", "low", "NEW", vec![Flag::new("needinfo", "outsider")]),
        issue(101, "alice", "medium", "ASSIGNED", vec![Flag::new("needinfo", "outsider1")]),
        issue(102, "bob", "medium", "POST", vec![Flag::new("needinfo", "bob")]),
        issue(100, "alice", "urgent", "NEW", vec![]),
    ];
    let output = render(issues, &["alice", "bob"], "text");

    let expected = "\
alice: 1/2: https://bugzilla.redhat.com/buglist.cgi?f1=bug_id&list_id=11351541&o1=anyexact&v1=100%2C101
\t  NEW https://bugzilla.redhat.com/show_bug.cgi?id=100
\t [needinfo:outsider1] ASSIGNED https://bugzilla.redhat.com/show_bug.cgi?id=101

bob: 1/2: https://bugzilla.redhat.com/buglist.cgi?f1=bug_id&list_id=11351541&o1=anyexact&v1=102%2C103
\t  POST https://bugzilla.redhat.com/show_bug.cgi?id=102
\t [low] NEW https://bugzilla.redhat.com/show_bug.cgi?id=103

Total: 2/4
";
    assert_eq!(output, expected);
}

#[test]
fn test_unassigned_bugs_come_first() {
    let issues = vec![
        issue(2, "alice", "high", "NEW", vec![]),
        issue(1, "", "high", "NEW", vec![]),
    ];
    let output = render(issues, &["alice"], "text");
    assert!(output.starts_with(": 1/1: "));
}

#[test]
fn test_ignored_sorted_by_severity_then_id() {
    let issues = vec![
        issue(9, "carol", "low", "NEW", vec![]),
        issue(8, "carol", "medium", "NEW", vec![Flag::new("needinfo", "")]),
        issue(7, "carol", "urgent", "NEW", vec![Flag::new("needinfo", "x")]),
        issue(6, "carol", "urgent", "NEW", vec![Flag::new("needinfo", "y")]),
        issue(5, "carol", "---", "NEW", vec![]),
    ];
    let output = render(issues, &["carol"], "text");
    let ids: Vec<&str> = output
        .lines()
        .filter(|line| line.starts_with('\t'))
        .filter_map(|line| line.rsplit("id=").next())
        .collect();
    assert_eq!(ids, vec!["5", "6", "7", "8", "9"]);
    assert!(output.contains("[needinfo:] NEW"));
    assert!(output.ends_with("Total: 1/5\n"));
}

#[test]
fn test_query_comes_from_config() {
    let config = Config {
        product: "Widgets".to_string(),
        current_release: "2.0".to_string(),
        next_release: "2.1".to_string(),
        ..Config::default()
    };
    let tracker = FakeTracker::new(Vec::new());
    generate_report(&tracker, &config).unwrap();

    let queries = tracker.queries.borrow();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].product, vec!["Widgets"]);
    assert_eq!(queries[0].target_release, vec!["---", "2.0", "2.1"]);
}

#[test]
fn test_fetch_error_produces_no_report() {
    let result = generate_report(&FailingTracker, &Config::default());
    let err = result.unwrap_err();
    assert!(matches!(err, Error::Tracker(_)));
    let source = std::error::Error::source(&err).expect("tracker error should carry a source");
    assert_eq!(source.to_string(), "connection refused");
}

#[test]
fn test_json_report() {
    let issues = vec![
        issue(100, "alice", "urgent", "NEW", vec![]),
        issue(101, "alice", "medium", "NEW", vec![Flag::new("needinfo", "outsider1")]),
    ];
    let output = render(issues, &["alice"], "json");
    let value: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");

    assert_eq!(value["total"], 2);
    assert_eq!(value["active"], 1);
    let alice = &value["assignees"][0];
    assert_eq!(alice["assignee"], "alice");
    assert_eq!(alice["issues"][0]["id"], 100);
    assert_eq!(alice["issues"][0]["severity"], "urgent");
    assert!(alice["issues"][0]["ignore_reason"].is_null());
    assert_eq!(alice["issues"][1]["ignore_reason"], "needinfo:outsider1");
    assert_eq!(
        alice["issues"][1]["url"],
        "https://bugzilla.redhat.com/show_bug.cgi?id=101"
    );
}

#[test]
fn test_links_follow_tracker_url() {
    let config = Config {
        tracker_url: "https://bugzilla.example.org/".to_string(),
        ..Config::default()
    };
    let tracker = FakeTracker::new(vec![issue(5, "zed", "high", "NEW", vec![])]);
    let report = generate_report(&tracker, &config).unwrap();
    let output = create_formatter("text", config.links()).format_report(&report);
    assert!(output.contains("https://bugzilla.example.org/show_bug.cgi?id=5"));
}

#[test]
fn test_write_report_to_buffer() {
    let rendered = render(vec![issue(1, "alice", "high", "NEW", vec![])], &["alice"], "text");
    let mut out = Vec::new();
    write_report(&mut out, &rendered).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), rendered);
}

#[test]
fn test_write_report_to_closed_pipe_is_error() {
    let err = write_report(ClosedPipe, "Total: 0/0\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BrokenPipe);
}
