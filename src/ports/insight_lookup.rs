//! Insight lookup (web search) port definition.

use crate::domain::{AppError, SearchHit};

/// Port for a black-box search service returning ranked snippets.
pub trait InsightLookup {
    /// Run `query` and return results in rank order.
    ///
    /// Returns [`AppError::LookupUnavailable`] when the service cannot be used
    /// at all (for example, no credential).
    fn search(&self, query: &str) -> Result<Vec<SearchHit>, AppError>;
}
