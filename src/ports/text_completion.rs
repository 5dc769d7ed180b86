//! Text-completion service port definition.

use crate::domain::AppError;

/// Sampling parameters sent with every completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    /// Maximum number of generated tokens.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
    /// Nucleus-sampling threshold.
    pub top_p: f32,
    /// Sequences that end generation.
    pub stop: Vec<String>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self { max_tokens: 768, temperature: 0.7, top_p: 0.95, stop: vec!["</s>".to_string()] }
    }
}

/// Port for a black-box text-completion service.
///
/// Implementations are long-lived: construct once and share by reference.
pub trait TextCompletion {
    /// Generate text continuing `prompt`.
    fn complete(&self, prompt: &str, params: &GenerationParams) -> Result<String, AppError>;
}
