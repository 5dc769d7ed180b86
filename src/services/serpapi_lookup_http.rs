//! SerpAPI search client using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

use crate::domain::{AppError, LookupConfig, SearchHit};
use crate::ports::InsightLookup;

/// HTTP client for SerpAPI's Google search engine.
#[derive(Clone)]
pub struct HttpSerpApiLookup {
    api_key: Option<String>,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpSerpApiLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSerpApiLookup")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl HttpSerpApiLookup {
    /// Create a lookup client. A missing credential is not an error here;
    /// every search then reports [`AppError::LookupUnavailable`].
    pub fn new(config: &LookupConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_key: config.api_key.clone(), api_url: config.api_url.clone(), client })
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    organic_results: Vec<OrganicResult>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OrganicResult {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    snippet: Option<String>,
}

impl InsightLookup for HttpSerpApiLookup {
    fn search(&self, query: &str) -> Result<Vec<SearchHit>, AppError> {
        let api_key = self.api_key.as_deref().ok_or(AppError::LookupUnavailable)?;

        let response = self
            .client
            .get(self.api_url.clone())
            .query(&[("engine", "google"), ("q", query), ("api_key", api_key)])
            .send()
            .map_err(|e| AppError::Lookup(format!("HTTP request failed: {}", e.without_url())))?;

        let status = response.status();
        let body: ApiResponse = response
            .json()
            .map_err(|e| AppError::Lookup(format!("Failed to parse response ({}): {}", status, e)))?;

        if let Some(error) = body.error {
            return Err(AppError::Lookup(error));
        }
        if !status.is_success() {
            return Err(AppError::Lookup(format!("API error ({})", status.as_u16())));
        }

        Ok(body
            .organic_results
            .into_iter()
            .map(|r| SearchHit::new(r.title.unwrap_or_default(), r.snippet.unwrap_or_default()))
            .collect())
    }
}
