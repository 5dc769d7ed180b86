pub mod configuration;
pub mod error;
pub mod insight;
pub mod lead;
pub mod outcome;
pub mod prompt;

pub use configuration::{CompletionConfig, LookupConfig, PipelineConfig};
pub use error::AppError;
pub use insight::SearchHit;
pub use lead::{EMAIL_COLUMN, LeadRecord, LeadTable, NAME_COLUMN, ResultTable};
pub use outcome::{BatchReport, LeadOutcome};
pub use prompt::{build_critique_prompt, build_draft_prompt};
