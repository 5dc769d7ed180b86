//! `generate` command: read leads, draft emails, write the augmented table.

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::app::commands::batch::run_batch;
use crate::domain::{AppError, BatchReport, LeadTable, ResultTable};
use crate::ports::{InsightLookup, TextCompletion};
use crate::services::lead_csv;

/// File name used for the output when none is given.
pub const DEFAULT_OUTPUT_FILE: &str = "leads_with_emails.csv";

/// Options for the generate command.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Input CSV with a `name` column.
    pub input: PathBuf,
    /// Output CSV; defaults to [`DEFAULT_OUTPUT_FILE`] next to the input.
    pub output: Option<PathBuf>,
}

impl GenerateOptions {
    /// Resolve where results go, refusing to overwrite the input.
    pub fn output_path(&self) -> Result<PathBuf, AppError> {
        let output =
            self.output.clone().unwrap_or_else(|| self.input.with_file_name(DEFAULT_OUTPUT_FILE));
        if same_file(&output, &self.input) {
            return Err(AppError::config_error(format!(
                "Output path {} would overwrite the input file; pass --output",
                output.display()
            )));
        }
        Ok(output)
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Result of a generate run.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub output_path: PathBuf,
    pub report: BatchReport,
}

/// Draft emails for every lead and attach them as the `email_text` column.
pub fn execute<C: TextCompletion, L: InsightLookup>(
    ctx: &AppContext<C, L>,
    table: LeadTable,
) -> Result<(ResultTable, BatchReport), AppError> {
    let report = run_batch(ctx, table.records());
    let result = table.with_email_text(report.email_texts())?;
    Ok((result, report))
}

/// Run the whole command against files.
pub fn execute_files<C: TextCompletion, L: InsightLookup>(
    ctx: &AppContext<C, L>,
    table: LeadTable,
    options: &GenerateOptions,
) -> Result<GenerateResult, AppError> {
    let output_path = options.output_path()?;
    let (result, report) = execute(ctx, table)?;
    lead_csv::write_results_file(&output_path, &result)?;
    Ok(GenerateResult { output_path, report })
}
