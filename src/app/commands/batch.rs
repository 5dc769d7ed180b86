//! Sequential batch driver over lead records.

use tracing::{info, warn};

use crate::app::AppContext;
use crate::app::commands::draft_loop::{DraftResult, draft_email};
use crate::app::commands::insight::fetch_insights;
use crate::domain::{AppError, BatchReport, LeadOutcome, LeadRecord};
use crate::ports::{InsightLookup, TextCompletion};

/// Look up insights for one lead and run the draft loop.
pub fn process_lead<C: TextCompletion, L: InsightLookup>(
    ctx: &AppContext<C, L>,
    record: &LeadRecord,
) -> Result<DraftResult, AppError> {
    let insights = fetch_insights(ctx.lookup(), record.name());
    draft_email(ctx.completion(), record.name(), &insights)
}

/// Process every record in input order, one at a time.
///
/// A failing record becomes a [`LeadOutcome::Failed`] and the batch moves on.
pub fn run_batch<C: TextCompletion, L: InsightLookup>(
    ctx: &AppContext<C, L>,
    records: &[LeadRecord],
) -> BatchReport {
    let total = records.len();
    let outcomes = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            info!(lead = index + 1, total, name = record.display_name(), "drafting email");
            match process_lead(ctx, record) {
                Ok(result) => {
                    LeadOutcome::Drafted { email: result.email, redrafted: result.redrafted }
                }
                Err(err) => {
                    warn!(name = record.display_name(), error = %err, "failed to generate email");
                    LeadOutcome::Failed {
                        name: record.display_name().to_string(),
                        reason: err.to_string(),
                    }
                }
            }
        })
        .collect();

    BatchReport::new(outcomes)
}
