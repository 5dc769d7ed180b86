//! Pipeline configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;
use crate::ports::GenerationParams;

/// Configuration for the lead pipeline, optionally loaded from a TOML file.
///
/// Secrets and the model artifact path never come from the file; they are
/// filled in from the environment by the loader.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Text-completion service configuration.
    #[serde(default)]
    pub completion: CompletionConfig,
    /// Insight lookup service configuration.
    #[serde(default)]
    pub lookup: LookupConfig,
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.completion.validate()?;
        self.lookup.validate()?;
        Ok(())
    }
}

/// Text-completion service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompletionConfig {
    /// Base URL of the llama.cpp server.
    #[serde(default = "default_server_url")]
    pub server_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_completion_timeout")]
    pub timeout_secs: u64,
    /// Context window the model is loaded with.
    #[serde(default = "default_context_window")]
    pub context_window: u32,
    /// Model artifact on disk.
    #[serde(skip)]
    pub model_path: Option<PathBuf>,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            timeout_secs: default_completion_timeout(),
            context_window: default_context_window(),
            model_path: None,
        }
    }
}

impl CompletionConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig(
                "completion.timeout_secs must be greater than 0".to_string(),
            ));
        }
        let max_tokens = GenerationParams::default().max_tokens;
        if self.context_window <= max_tokens {
            return Err(AppError::InvalidConfig(format!(
                "completion.context_window must be greater than the max output length ({})",
                max_tokens
            )));
        }
        Ok(())
    }

    /// Arguments the llama.cpp server must be started with for this config.
    pub fn server_args(&self) -> Vec<String> {
        let model = self
            .model_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<LLAMA_MODEL_PATH>".to_string());
        vec![
            "--model".to_string(),
            model,
            "--ctx-size".to_string(),
            self.context_window.to_string(),
        ]
    }
}

/// Insight lookup service configuration.
#[derive(Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LookupConfig {
    /// SerpAPI search endpoint.
    #[serde(default = "default_lookup_url")]
    pub api_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_lookup_timeout")]
    pub timeout_secs: u64,
    /// API credential; absent means lookups degrade to a placeholder.
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl std::fmt::Debug for LookupConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupConfig")
            .field("api_url", &self.api_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            api_url: default_lookup_url(),
            timeout_secs: default_lookup_timeout(),
            api_key: None,
        }
    }
}

impl LookupConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig(
                "lookup.timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_server_url() -> Url {
    Url::parse("http://127.0.0.1:8080").expect("Default server URL must be valid")
}

fn default_completion_timeout() -> u64 {
    300
}

fn default_context_window() -> u32 {
    2048
}

fn default_lookup_url() -> Url {
    Url::parse("https://serpapi.com/search.json").expect("Default lookup URL must be valid")
}

fn default_lookup_timeout() -> u64 {
    30
}
