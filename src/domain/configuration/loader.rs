//! Pipeline configuration loading from file and environment.

use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use crate::domain::{AppError, PipelineConfig};

/// Path to the model artifact served by the completion runtime.
pub const MODEL_PATH_ENV: &str = "LLAMA_MODEL_PATH";
/// Base URL of the completion server.
pub const SERVER_URL_ENV: &str = "LLAMA_SERVER_URL";
/// SerpAPI credential.
pub const LOOKUP_API_KEY_ENV: &str = "SERPAPI_API_KEY";
/// SerpAPI endpoint override.
pub const LOOKUP_URL_ENV: &str = "SERPAPI_URL";

/// Load configuration from an optional TOML file, then the process environment.
pub fn load_config(path: Option<&Path>) -> Result<PipelineConfig, AppError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|e| {
                AppError::config_error(format!(
                    "Failed to read config file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            parse_config_content(&content)?
        }
        None => PipelineConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<PipelineConfig, AppError> {
    let config: PipelineConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Fill in environment-provided values. Empty values count as unset.
pub fn apply_env_overrides<F>(config: &mut PipelineConfig, env: F) -> Result<(), AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| env(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    if let Some(path) = get(MODEL_PATH_ENV) {
        config.completion.model_path = Some(PathBuf::from(path));
    }
    if let Some(url) = get(SERVER_URL_ENV) {
        config.completion.server_url = parse_url(SERVER_URL_ENV, &url)?;
    }
    if let Some(key) = get(LOOKUP_API_KEY_ENV) {
        config.lookup.api_key = Some(key);
    }
    if let Some(url) = get(LOOKUP_URL_ENV) {
        config.lookup.api_url = parse_url(LOOKUP_URL_ENV, &url)?;
    }
    Ok(())
}

fn parse_url(key: &str, value: &str) -> Result<Url, AppError> {
    Url::parse(value)
        .map_err(|e| AppError::InvalidConfig(format!("{} is not a valid URL: {}", key, e)))
}
