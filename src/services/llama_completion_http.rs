//! Text-completion client for a llama.cpp server using reqwest.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::configuration::MODEL_PATH_ENV;
use crate::domain::{AppError, CompletionConfig};
use crate::ports::{GenerationParams, TextCompletion};

/// HTTP client for the llama.cpp `/completion` endpoint.
///
/// The server hosts the model loaded from `model_path` with `context_window`
/// tokens of context; this client is created once per process.
#[derive(Debug, Clone)]
pub struct HttpLlamaCompletion {
    completion_url: Url,
    health_url: Url,
    model_path: PathBuf,
    context_window: u32,
    client: Client,
}

impl HttpLlamaCompletion {
    /// Create a client, verifying the model artifact exists.
    pub fn new(config: &CompletionConfig) -> Result<Self, AppError> {
        let model_path = config.model_path.clone().ok_or_else(|| {
            AppError::config_error(format!("{} environment variable not set", MODEL_PATH_ENV))
        })?;
        if !model_path.is_file() {
            return Err(AppError::config_error(format!(
                "Model artifact not found: {}",
                model_path.display()
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            completion_url: endpoint(&config.server_url, "completion"),
            health_url: endpoint(&config.server_url, "health"),
            model_path,
            context_window: config.context_window,
            client,
        })
    }

    pub fn model_path(&self) -> &std::path::Path {
        &self.model_path
    }

    pub fn context_window(&self) -> u32 {
        self.context_window
    }

    /// Check that the server is up and has finished loading the model.
    pub fn health(&self) -> Result<(), AppError> {
        let response = self
            .client
            .get(self.health_url.clone())
            .send()
            .map_err(|e| AppError::Completion(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(AppError::Completion(format!("Server not ready ({})", status.as_u16())))
        }
    }
}

/// Join `path` onto `base`, keeping any path prefix `base` already has.
pub(crate) fn endpoint(base: &Url, path: &str) -> Url {
    let mut url = base.clone();
    let prefix = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{}/{}", prefix, path));
    url
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    prompt: &'a str,
    n_predict: u32,
    temperature: f32,
    top_p: f32,
    stop: &'a [String],
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    content: Option<String>,
}

impl TextCompletion for HttpLlamaCompletion {
    fn complete(&self, prompt: &str, params: &GenerationParams) -> Result<String, AppError> {
        let request = ApiRequest {
            prompt,
            n_predict: params.max_tokens,
            temperature: params.temperature,
            top_p: params.top_p,
            stop: &params.stop,
        };

        let response = self
            .client
            .post(self.completion_url.clone())
            .json(&request)
            .send()
            .map_err(|e| AppError::Completion(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            let api_response: ApiResponse = response
                .json()
                .map_err(|e| AppError::Completion(format!("Failed to parse response: {}", e)))?;

            api_response
                .content
                .ok_or_else(|| AppError::Completion("No content in response".into()))
        } else if status.is_server_error() {
            Err(AppError::Completion(format!("Server error ({})", status.as_u16())))
        } else {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            Err(AppError::Completion(format!("API error ({}): {}", status.as_u16(), error_text)))
        }
    }
}
