mod fake_completion;
mod fake_lookup;

pub use fake_completion::{FakeCompletion, is_critique_prompt};
pub use fake_lookup::FakeLookup;
