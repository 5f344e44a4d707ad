use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::errors::{PipelineError, PipelineResult};
use crate::models::completion::{Choice, CompletionRequest, CompletionResponse, Usage};
use crate::models::message::Message;
use crate::providers::base::Provider;

/// A mock provider that returns pre-configured responses for testing
pub struct MockProvider {
    responses: Arc<Mutex<Vec<PipelineResult<CompletionResponse>>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockProvider {
    /// Create a new mock provider with a sequence of responses
    pub fn new(responses: Vec<PipelineResult<CompletionResponse>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A provider that answers once with a single assistant message
    pub fn replying(message: Message) -> Self {
        Self::new(vec![Ok(response_with(vec![message]))])
    }

    /// Every request received so far, in order
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

pub fn response_with(messages: Vec<Message>) -> CompletionResponse {
    CompletionResponse {
        id: "chatcmpl-mock".to_string(),
        object: "chat.completion".to_string(),
        created: 0,
        model: "mock".to_string(),
        choices: messages
            .into_iter()
            .enumerate()
            .map(|(index, message)| Choice {
                index: index as u32,
                message,
                finish_reason: Some("stop".to_string()),
            })
            .collect(),
        usage: Usage::default(),
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn complete(&self, request: CompletionRequest) -> PipelineResult<CompletionResponse> {
        self.requests.lock().unwrap().push(request);
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Err(PipelineError::EmptyUpstreamResponse)
        } else {
            responses.remove(0)
        }
    }
}
