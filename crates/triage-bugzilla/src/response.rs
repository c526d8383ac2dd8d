// Rust guideline compliant 2026-02-06

//! Decoding of `/rest/bug` responses.

use crate::error::BugzillaError;
use serde::Deserialize;
use triage_core::Issue;

/// Longest body excerpt kept in status errors.
const BODY_EXCERPT: usize = 200;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    bugs: Vec<Issue>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    error: bool,
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

/// Decodes a search response.
///
/// # Arguments
///
/// * `status` - HTTP status code
/// * `body` - Raw response body
///
/// # Returns
///
/// The issues in response order.
///
/// # Errors
///
/// Returns an error if:
/// - The body is a Bugzilla error payload
/// - The status is not 2xx
/// - The body is not valid search JSON
pub fn parse_search_response(status: u16, body: &str) -> Result<Vec<Issue>, BugzillaError> {
    if let Ok(api_error) = serde_json::from_str::<ApiError>(body) {
        if api_error.error {
            return Err(BugzillaError::Api {
                code: api_error.code,
                message: api_error.message,
            });
        }
    }

    if !(200..300).contains(&status) {
        return Err(BugzillaError::Status {
            status,
            body: body.chars().take(BODY_EXCERPT).collect(),
        });
    }

    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response.bugs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bug_list() {
        let issues = parse_search_response(200, r#"{"bugs": [], "faults": []}"#).unwrap();
        assert!(issues.is_empty());
    }

    #[test]
    fn test_api_error_payload() {
        let body = r#"{"error": true, "code": 102, "message": "You are not authorized", "documentation": "x"}"#;
        let err = parse_search_response(401, body).unwrap_err();
        match err {
            BugzillaError::Api { code, message } => {
                assert_eq!(code, 102);
                assert_eq!(message, "You are not authorized");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_status_error_truncates_body() {
        let body = "x".repeat(1000);
        let err = parse_search_response(502, &body).unwrap_err();
        match err {
            BugzillaError::Status { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body.len(), BODY_EXCERPT);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_search_response(200, "<html>").unwrap_err();
        assert!(matches!(err, BugzillaError::Decode(_)));
    }
}
