//! Insight text derived from search results.

use crate::domain::AppError;

/// Maximum number of search results folded into the insight text.
pub const MAX_INSIGHT_RESULTS: usize = 5;

/// Placeholder used when the lookup service has no credential.
pub const LOOKUP_UNAVAILABLE_PLACEHOLDER: &str =
    "(Unable to fetch insights - SerpAPI not available)";

/// One ranked search result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub snippet: String,
}

impl SearchHit {
    pub fn new(title: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self { title: title.into(), snippet: snippet.into() }
    }
}

/// Search query used to find insights about a lead.
pub fn insight_query(name: &str) -> String {
    format!("{} favorite vacation destinations USA", name)
}

/// Render up to [`MAX_INSIGHT_RESULTS`] hits as `title: snippet` lines.
pub fn render_insights(hits: &[SearchHit]) -> String {
    hits.iter()
        .take(MAX_INSIGHT_RESULTS)
        .map(|hit| format!("{}: {}", hit.title, hit.snippet))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Human-readable stand-in for insight text when the lookup failed.
pub fn lookup_failure_placeholder(error: &AppError) -> String {
    match error {
        AppError::LookupUnavailable => LOOKUP_UNAVAILABLE_PLACEHOLDER.to_string(),
        other => format!("(Error fetching search results: {})", other),
    }
}
