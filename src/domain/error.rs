use std::io;

use thiserror::Error;

/// Library-wide error type for leadmail operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Lead file could not be read or written as CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration values failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Input table has no `name` column.
    #[error("The input file must contain a 'name' column")]
    MissingNameColumn,

    /// Text-completion request failed.
    #[error("Completion failed: {0}")]
    Completion(String),

    /// Insight lookup request failed.
    #[error("{0}")]
    Lookup(String),

    /// Insight lookup has no credential configured.
    #[error("SerpAPI not available")]
    LookupUnavailable,

    /// Prompt template could not be rendered.
    #[error("Prompt render failed for '{template}': {reason}")]
    PromptRender { template: String, reason: String },

    /// Generated column does not line up with the input rows.
    #[error("Expected {expected} email values, got {actual}")]
    RowCountMismatch { expected: usize, actual: usize },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
