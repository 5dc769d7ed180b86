pub mod loader;
pub mod pipeline_config;

pub use loader::{
    LOOKUP_API_KEY_ENV, LOOKUP_URL_ENV, MODEL_PATH_ENV, SERVER_URL_ENV, apply_env_overrides,
    load_config, parse_config_content,
};
pub use pipeline_config::{CompletionConfig, LookupConfig, PipelineConfig};
