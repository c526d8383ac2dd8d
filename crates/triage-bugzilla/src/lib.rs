// Rust guideline compliant 2026-02-06

//! Bugzilla REST client for the triage pipeline.
//!
//! Implements [`triage_core::Tracker`] on top of `GET /rest/bug`.

pub mod client;
pub mod error;
pub mod response;

pub use client::{search_params, BugzillaClient, API_KEY_HEADER};
pub use error::BugzillaError;
pub use response::parse_search_response;
