use std::sync::{Arc, Mutex};

use crate::domain::{AppError, SearchHit};
use crate::ports::InsightLookup;

type Responder = Box<dyn Fn(&str) -> Result<Vec<SearchHit>, AppError>>;

/// Lookup fake that records queries and answers from a responder.
pub struct FakeLookup {
    responder: Responder,
    pub queries: Arc<Mutex<Vec<String>>>,
}

impl FakeLookup {
    pub fn new(responder: impl Fn(&str) -> Result<Vec<SearchHit>, AppError> + 'static) -> Self {
        Self { responder: Box::new(responder), queries: Arc::new(Mutex::new(vec![])) }
    }

    /// Always return `hits`.
    pub fn with_hits(hits: Vec<SearchHit>) -> Self {
        Self::new(move |_| Ok(hits.clone()))
    }

    /// Always return no results.
    pub fn empty() -> Self {
        Self::with_hits(vec![])
    }

    /// Behave like a lookup with no credential configured.
    pub fn unavailable() -> Self {
        Self::new(|_| Err(AppError::LookupUnavailable))
    }

    /// Fail every search with `message`.
    pub fn failing(message: &str) -> Self {
        let message = message.to_string();
        Self::new(move |_| Err(AppError::Lookup(message.clone())))
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl InsightLookup for FakeLookup {
    fn search(&self, query: &str) -> Result<Vec<SearchHit>, AppError> {
        self.queries.lock().unwrap().push(query.to_string());
        (self.responder)(query)
    }
}
