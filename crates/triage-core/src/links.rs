// Rust guideline compliant 2026-02-06

//! Links back into the tracker's web UI.

/// Saved search used by the tracker for ID-list queries.
const LIST_ID: &str = "11351541";

/// Builds tracker web links from a base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Links {
    base_url: String,
}

impl Links {
    /// Creates a link builder. Trailing slashes on `base_url` are dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Returns the base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search listing every given issue, IDs separated by `%2C`.
    #[must_use]
    pub fn buglist_url(&self, ids: &[u64]) -> String {
        let ids = ids
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join("%2C");
        format!(
            "{}/buglist.cgi?f1=bug_id&list_id={}&o1=anyexact&v1={}",
            self.base_url, LIST_ID, ids
        )
    }

    /// Single issue view.
    #[must_use]
    pub fn show_bug_url(&self, id: u64) -> String {
        format!("{}/show_bug.cgi?id={}", self.base_url, id)
    }

    /// Page where users create API keys.
    #[must_use]
    pub fn api_key_url(&self) -> String {
        format!("{}/userprefs.cgi?tab=apikey", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buglist_url() {
        let links = Links::new("https://bugzilla.redhat.com");
        assert_eq!(
            links.buglist_url(&[100, 101, 102]),
            "https://bugzilla.redhat.com/buglist.cgi?f1=bug_id&list_id=11351541&o1=anyexact&v1=100%2C101%2C102"
        );
    }

    #[test]
    fn test_show_bug_url() {
        let links = Links::new("https://bugzilla.redhat.com/");
        assert_eq!(
            links.show_bug_url(1850000),
            "https://bugzilla.redhat.com/show_bug.cgi?id=1850000"
        );
    }

    #[test]
    fn test_api_key_url() {
        let links = Links::new("https://bugzilla.example.org");
        assert_eq!(
            links.api_key_url(),
            "https://bugzilla.example.org/userprefs.cgi?tab=apikey"
        );
    }
}
