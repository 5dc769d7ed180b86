//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together configuration,
//! context creation, and command execution.

use std::path::Path;

use tracing::{info, warn};

use crate::app::AppContext;
use crate::app::commands::{doctor as doctor_cmd, generate as generate_cmd};
use crate::domain::configuration::{LOOKUP_API_KEY_ENV, load_config};
use crate::services::{HttpLlamaCompletion, HttpSerpApiLookup, lead_csv};

pub use crate::app::commands::doctor::DoctorOutcome;
pub use crate::app::commands::generate::{GenerateOptions, GenerateResult};
pub use crate::domain::AppError;

/// Generate outreach emails for every lead in `options.input`.
///
/// The input is validated before any service is contacted; a missing `name`
/// column rejects the batch and nothing is written.
pub fn generate(
    options: GenerateOptions,
    config_path: Option<&Path>,
) -> Result<GenerateResult, AppError> {
    let table = lead_csv::read_leads_file(&options.input)?;
    let config = load_config(config_path)?;

    let completion = HttpLlamaCompletion::new(&config.completion)?;
    info!(
        model = %completion.model_path().display(),
        context_window = completion.context_window(),
        server = %config.completion.server_url,
        "completion client ready"
    );

    let lookup = HttpSerpApiLookup::new(&config.lookup)?;
    if !lookup.has_credential() {
        warn!("{} not set; insights will use a placeholder", LOOKUP_API_KEY_ENV);
    }

    let ctx = AppContext::new(completion, lookup);
    generate_cmd::execute_files(&ctx, table, &options)
}

/// Check configuration and service availability.
pub fn doctor(config_path: Option<&Path>) -> Result<DoctorOutcome, AppError> {
    let config = load_config(config_path)?;
    Ok(doctor_cmd::execute(&config))
}
