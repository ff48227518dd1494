//! Mock generation driver for testing.

use async_trait::async_trait;
use sparc_core::{GenerateRequest, GenerateResponse};
use sparc_error::{GenerationError, GenerationErrorKind, SparcResult};
use sparc_interface::GenerationDriver;
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum MockBehavior {
    /// Always return success with the given text
    Success(String),
    /// Always return the specified error
    Error(GenerationErrorKind),
    /// Return a sequence of responses (errors or success)
    Sequence(Vec<MockResponse>),
}

/// A single mock response (success or error).
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum MockResponse {
    Success(String),
    Error(GenerationErrorKind),
}

/// Mock driver that counts calls and records every request it receives.
#[derive(Clone)]
pub struct MockDriver {
    behavior: MockBehavior,
    call_count: Arc<Mutex<usize>>,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

#[allow(dead_code)]
impl MockDriver {
    /// Create a mock driver that always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Success(text.into()))
    }

    /// Create a mock driver that always fails with the given error.
    pub fn new_error(error: GenerationErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(error))
    }

    /// Create a mock driver with a sequence of responses.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self::new_with_behavior(MockBehavior::Sequence(responses))
    }

    /// Create a mock driver with custom behavior.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(Mutex::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the number of times generate() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// User prompts sent so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter_map(|r| r.messages.last().map(|m| m.content.clone()))
            .collect()
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn next_response(&self) -> SparcResult<GenerateResponse> {
        let mut count = self.call_count.lock().unwrap();
        let current_count = *count;
        *count += 1;

        match &self.behavior {
            MockBehavior::Success(text) => Ok(GenerateResponse::new(text.clone())),
            MockBehavior::Error(kind) => Err(GenerationError::new(kind.clone()).into()),
            MockBehavior::Sequence(responses) => match responses.get(current_count) {
                Some(MockResponse::Success(text)) => Ok(GenerateResponse::new(text.clone())),
                Some(MockResponse::Error(kind)) => Err(GenerationError::new(kind.clone()).into()),
                None => Err(GenerationError::new(GenerationErrorKind::Transport(format!(
                    "Mock sequence exhausted (call {} beyond {} responses)",
                    current_count + 1,
                    responses.len()
                )))
                .into()),
            },
        }
    }
}

#[async_trait]
impl GenerationDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> SparcResult<GenerateResponse> {
        self.requests.lock().unwrap().push(req.clone());
        self.next_response()
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
