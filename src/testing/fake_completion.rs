use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{GenerationParams, TextCompletion};

type Responder = Box<dyn Fn(&str) -> Result<String, AppError>>;

/// Whether `prompt` is a critique request rather than a draft request.
pub fn is_critique_prompt(prompt: &str) -> bool {
    prompt.contains("sales communication coach")
}

/// Completion fake that records every prompt and answers from a responder.
pub struct FakeCompletion {
    responder: Responder,
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub params: Arc<Mutex<Vec<GenerationParams>>>,
}

impl FakeCompletion {
    pub fn new(responder: impl Fn(&str) -> Result<String, AppError> + 'static) -> Self {
        Self {
            responder: Box::new(responder),
            prompts: Arc::new(Mutex::new(vec![])),
            params: Arc::new(Mutex::new(vec![])),
        }
    }

    /// Answer with `responses` in order; fail once they run out.
    pub fn scripted(responses: &[&str]) -> Self {
        let queue: Mutex<VecDeque<String>> =
            Mutex::new(responses.iter().map(|r| r.to_string()).collect());
        Self::new(move |_| {
            queue
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| AppError::Completion("script exhausted".into()))
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn draft_call_count(&self) -> usize {
        self.prompts().iter().filter(|p| !is_critique_prompt(p)).count()
    }
}

impl TextCompletion for FakeCompletion {
    fn complete(&self, prompt: &str, params: &GenerationParams) -> Result<String, AppError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.params.lock().unwrap().push(params.clone());
        (self.responder)(prompt)
    }
}
