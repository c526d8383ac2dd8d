// Rust guideline compliant 2026-02-06

//! The seam between the triage pipeline and a bug tracker.

use crate::models::Issue;
use crate::query::Query;
use crate::Result;

/// A bug tracker that can answer searches.
pub trait Tracker {
    /// Returns every issue matching `query`, in tracker order.
    ///
    /// # Errors
    ///
    /// Returns `Error::Tracker` if the search fails for any reason. No partial
    /// results are returned.
    fn search(&self, query: &Query) -> Result<Vec<Issue>>;
}

impl<T: Tracker + ?Sized> Tracker for &T {
    fn search(&self, query: &Query) -> Result<Vec<Issue>> {
        (**self).search(query)
    }
}

impl<T: Tracker + ?Sized> Tracker for Box<T> {
    fn search(&self, query: &Query) -> Result<Vec<Issue>> {
        (**self).search(query)
    }
}
