//! Prompt builder for draft and critique requests.
//!
//! Templates are embedded at compile time and rendered with minijinja. Values
//! are inserted verbatim, so template syntax inside a name or a search
//! snippet is never evaluated.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::AppError;

const DRAFT_TEMPLATE: &str = "draft_email.txt";
const CRITIQUE_TEMPLATE: &str = "critique_email.txt";

const TEMPLATES: &[(&str, &str)] = &[
    (DRAFT_TEMPLATE, include_str!("../../assets/prompts/draft_email.txt")),
    (CRITIQUE_TEMPLATE, include_str!("../../assets/prompts/critique_email.txt")),
];

static ENV: OnceLock<Result<Environment<'static>, String>> = OnceLock::new();

/// Register `sources` in a strict environment, keeping the first parse error.
fn build_environment(
    sources: &[(&'static str, &'static str)],
) -> Result<Environment<'static>, String> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);
    for &(name, source) in sources {
        env.add_template(name, source)
            .map_err(|e| format!("Failed to register template '{}': {}", name, e))?;
    }
    Ok(env)
}

fn render(template_name: &str, ctx: minijinja::Value) -> Result<String, AppError> {
    let render_error = |reason: String| AppError::PromptRender {
        template: template_name.to_string(),
        reason,
    };

    let env = ENV
        .get_or_init(|| build_environment(TEMPLATES))
        .as_ref()
        .map_err(|reason| render_error(reason.clone()))?;
    env.get_template(template_name)
        .and_then(|template| template.render(ctx))
        .map_err(|err| render_error(err.to_string()))
}

/// Build the instruction prompt for drafting an outreach email.
///
/// `feedback` is the critique from a previous round, or empty on the first
/// pass.
pub fn build_draft_prompt(name: &str, insights: &str, feedback: &str) -> Result<String, AppError> {
    render(DRAFT_TEMPLATE, context! { name => name, insights => insights, feedback => feedback })
}

/// Build the reviewer prompt asking for a critique of `draft`.
pub fn build_critique_prompt(draft: &str) -> Result<String, AppError> {
    render(CRITIQUE_TEMPLATE, context! { draft => draft })
}
