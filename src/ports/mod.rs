mod insight_lookup;
mod text_completion;

pub use insight_lookup::InsightLookup;
pub use text_completion::{GenerationParams, TextCompletion};
