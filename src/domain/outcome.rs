//! Per-lead results and their aggregation.

/// Result of processing one lead record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeadOutcome {
    /// A final draft was produced.
    Drafted {
        /// Trimmed email body.
        email: String,
        /// Whether the critique asked for a second draft.
        redrafted: bool,
    },
    /// Some step failed; the batch continued without this lead.
    Failed {
        /// Lead name, or the placeholder when absent.
        name: String,
        /// Description of the error.
        reason: String,
    },
}

impl LeadOutcome {
    /// Value written to the `email_text` column.
    pub fn email_text(&self) -> String {
        match self {
            LeadOutcome::Drafted { email, .. } => email.clone(),
            LeadOutcome::Failed { name, reason } => {
                format!("(Failed to generate email for {}: {})", name, reason)
            }
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LeadOutcome::Failed { .. })
    }
}

/// Ordered outcomes for a whole batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    outcomes: Vec<LeadOutcome>,
}

impl BatchReport {
    pub fn new(outcomes: Vec<LeadOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn outcomes(&self) -> &[LeadOutcome] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failed()).count()
    }

    pub fn redrafted_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, LeadOutcome::Drafted { redrafted: true, .. }))
            .count()
    }

    /// Column values in input order.
    pub fn email_texts(&self) -> Vec<String> {
        self.outcomes.iter().map(LeadOutcome::email_text).collect()
    }
}
