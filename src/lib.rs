//! leadmail: enrich a list of leads with search insights and draft
//! critic-reviewed outreach emails with a local language model.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::AppContext;
pub use app::api::{DoctorOutcome, GenerateOptions, GenerateResult, doctor, generate};
pub use app::commands::batch::{process_lead, run_batch};
pub use app::commands::draft_loop::{APPROVAL_MARKER, DraftResult, draft_email, is_approved};
pub use app::commands::insight::fetch_insights;
pub use domain::{
    AppError, BatchReport, LeadOutcome, LeadRecord, LeadTable, PipelineConfig, ResultTable,
    SearchHit, build_critique_prompt, build_draft_prompt,
};
pub use ports::{GenerationParams, InsightLookup, TextCompletion};
