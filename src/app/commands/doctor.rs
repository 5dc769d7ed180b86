//! `doctor` command: check that the pipeline's external services are usable.

use crate::domain::configuration::LOOKUP_API_KEY_ENV;
use crate::domain::PipelineConfig;
use crate::services::HttpLlamaCompletion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub check: &'static str,
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn push_error(&mut self, check: &'static str, message: impl Into<String>) {
        let diagnostic = Diagnostic { check, message: message.into(), severity: Severity::Error };
        self.errors.push(diagnostic);
    }

    pub fn push_warning(&mut self, check: &'static str, message: impl Into<String>) {
        let diagnostic = Diagnostic { check, message: message.into(), severity: Severity::Warning };
        self.warnings.push(diagnostic);
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.errors.iter().chain(&self.warnings)
    }

    pub fn emit(&self) {
        for diagnostic in &self.errors {
            eprintln!("[ERROR] {}: {}", diagnostic.check, diagnostic.message);
        }
        for diagnostic in &self.warnings {
            eprintln!("[WARN] {}: {}", diagnostic.check, diagnostic.message);
        }
    }
}

#[derive(Debug)]
pub struct DoctorOutcome {
    pub diagnostics: Diagnostics,
    /// Arguments to start the completion server with.
    pub server_args: Vec<String>,
    pub exit_code: i32,
}

/// Check the model artifact, completion server, and lookup credential.
pub fn execute(config: &PipelineConfig) -> DoctorOutcome {
    let mut diagnostics = Diagnostics::default();

    match HttpLlamaCompletion::new(&config.completion) {
        Ok(client) => {
            if let Err(err) = client.health() {
                diagnostics.push_error(
                    "completion",
                    format!("{} at {}", err, config.completion.server_url),
                );
            }
        }
        Err(err) => diagnostics.push_error("model", err.to_string()),
    }

    if config.lookup.api_key.is_none() {
        diagnostics.push_warning(
            "lookup",
            format!("{} not set; insights will use a placeholder", LOOKUP_API_KEY_ENV),
        );
    }

    let exit_code = if diagnostics.error_count() > 0 { 1 } else { 0 };
    DoctorOutcome { diagnostics, server_args: config.completion.server_args(), exit_code }
}
