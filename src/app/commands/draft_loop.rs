//! Draft, critique, and at most one redraft for a single lead.

use tracing::{debug, info};

use crate::domain::{AppError, build_critique_prompt, build_draft_prompt};
use crate::ports::{GenerationParams, TextCompletion};

/// Marker a critique must contain (case-insensitive) to accept the first draft.
pub const APPROVAL_MARKER: &str = "APPROVED";

/// Final draft for one lead plus the review that decided it.
///
/// Every completion is trimmed as soon as it returns, so the critique prompt
/// and the redraft feedback carry trimmed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftResult {
    /// Trimmed final email body.
    pub email: String,
    /// Critique of the first draft.
    pub critique: String,
    /// Whether the first draft was replaced.
    pub redrafted: bool,
}

/// Whether `critique` approves the draft.
///
/// This is a plain substring test on the upper-cased text, so phrases such as
/// "not approved" or "disapproved" also count as approval.
pub fn is_approved(critique: &str) -> bool {
    critique.to_uppercase().contains(APPROVAL_MARKER)
}

/// Draft an email, have it critiqued, and redraft once if not approved.
///
/// Makes two completion calls when the critique approves and three when it
/// does not. The redraft is never critiqued again. Completion and prompt
/// errors propagate to the caller.
pub fn draft_email<C: TextCompletion + ?Sized>(
    completion: &C,
    name: &str,
    insights: &str,
) -> Result<DraftResult, AppError> {
    let params = GenerationParams::default();
    let ask = |prompt: String| -> Result<String, AppError> {
        Ok(completion.complete(&prompt, &params)?.trim().to_string())
    };

    let mut draft = ask(build_draft_prompt(name, insights, "")?)?;
    let critique = ask(build_critique_prompt(&draft)?)?;
    debug!(name, draft = %draft, critique = %critique, "first draft reviewed");

    let redrafted = !is_approved(&critique);
    if redrafted {
        info!(name, "critique requested changes, redrafting");
        draft = ask(build_draft_prompt(name, insights, &critique)?)?;
        debug!(name, draft = %draft, "redraft complete");
    }

    Ok(DraftResult { email: draft, critique, redrafted })
}
