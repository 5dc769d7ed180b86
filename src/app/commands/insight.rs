//! Insight lookup wrapper that never fails.

use tracing::warn;

use crate::domain::insight::{insight_query, lookup_failure_placeholder, render_insights};
use crate::ports::InsightLookup;

/// Look up insights about `name`, rendering failures as placeholder text.
pub fn fetch_insights<L: InsightLookup + ?Sized>(lookup: &L, name: &str) -> String {
    match lookup.search(&insight_query(name)) {
        Ok(hits) => render_insights(&hits),
        Err(err) => {
            warn!(name, error = %err, "insight lookup failed, using placeholder");
            lookup_failure_placeholder(&err)
        }
    }
}
