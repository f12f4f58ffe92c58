use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{SessionClient, SessionResponse};

/// Records submitted prompts and replays canned responses.
#[derive(Clone, Default)]
pub struct FakeSessionClient {
    pub posted: Arc<Mutex<Vec<String>>>,
    responses: Arc<Mutex<VecDeque<SessionResponse>>>,
}

impl FakeSessionClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue responses; once exhausted every call returns `201 {}`.
    pub fn with_responses(responses: impl IntoIterator<Item = SessionResponse>) -> Self {
        Self {
            posted: Arc::new(Mutex::new(vec![])),
            responses: Arc::new(Mutex::new(responses.into_iter().collect())),
        }
    }

    pub fn posted_prompts(&self) -> Vec<String> {
        self.posted.lock().unwrap().clone()
    }
}

impl SessionClient for FakeSessionClient {
    fn post_prompt(&self, prompt: &str) -> SessionResponse {
        self.posted.lock().unwrap().push(prompt.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| SessionResponse::new(201, "{}"))
    }
}
