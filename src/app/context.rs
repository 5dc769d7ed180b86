use crate::ports::{InsightLookup, TextCompletion};

/// Application context holding the external service clients for a batch.
///
/// Built once at startup; every lead and every call within a lead uses the
/// same clients.
pub struct AppContext<C: TextCompletion, L: InsightLookup> {
    completion: C,
    lookup: L,
}

impl<C: TextCompletion, L: InsightLookup> AppContext<C, L> {
    /// Create a new application context.
    pub fn new(completion: C, lookup: L) -> Self {
        Self { completion, lookup }
    }

    /// Get a reference to the text-completion client.
    pub fn completion(&self) -> &C {
        &self.completion
    }

    /// Get a reference to the insight lookup client.
    pub fn lookup(&self) -> &L {
        &self.lookup
    }
}
