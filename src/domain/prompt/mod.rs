pub mod builder;

pub use builder::{build_critique_prompt, build_draft_prompt};
