// Rust guideline compliant 2026-02-06

//! Blocking HTTP client for Bugzilla searches.

use crate::error::BugzillaError;
use crate::response::parse_search_response;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, info};
use triage_core::{Issue, Query, Tracker};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-BUGZILLA-API-KEY";

/// Bugzilla search client.
#[derive(Debug, Clone)]
pub struct BugzillaClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl BugzillaClient {
    /// Creates a client for the Bugzilla instance at `base_url`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Instance root, e.g. `https://bugzilla.redhat.com`
    /// * `api_key` - API key sent with every request
    /// * `timeout` - Per-request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, BugzillaError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("bug-triage/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Returns the search endpoint URL.
    #[must_use]
    pub fn search_url(&self) -> String {
        format!("{}/rest/bug", self.base_url)
    }

    fn fetch(&self, query: &Query) -> Result<Vec<Issue>, BugzillaError> {
        let url = self.search_url();
        let params = search_params(query);
        info!(url = %url, "searching bugs");
        debug!(?query, "search query");

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header("Accept", "application/json")
            .query(&params)
            .send()?;

        let status = response.status().as_u16();
        let body = response.text()?;
        debug!(status, bytes = body.len(), "search response");

        let issues = parse_search_response(status, &body)?;
        debug!(count = issues.len(), "fetched bugs");
        Ok(issues)
    }
}

impl Tracker for BugzillaClient {
    fn search(&self, query: &Query) -> triage_core::Result<Vec<Issue>> {
        self.fetch(query).map_err(triage_core::Error::tracker)
    }
}

/// Converts a query into `/rest/bug` parameters.
///
/// List filters repeat their parameter once per value; the inclusion list is
/// sent as one comma-separated value and omitted when empty.
pub fn search_params(query: &Query) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    let repeated = [
        ("product", &query.product),
        ("component", &query.component),
        ("bug_status", &query.status),
        ("target_release", &query.target_release),
    ];
    for (name, values) in repeated {
        params.extend(values.iter().map(|value| (name, value.clone())));
    }

    if !query.include_fields.is_empty() {
        params.push(("include_fields", query.include_fields.join(",")));
    }

    params
}
