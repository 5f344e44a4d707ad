use async_trait::async_trait;

use crate::errors::PipelineResult;
use crate::models::completion::{CompletionRequest, CompletionResponse};

/// Base trait for chat completion endpoints
#[async_trait]
pub trait Provider: Send + Sync {
    /// Send one request and return the endpoint's response, making exactly one attempt
    async fn complete(&self, request: CompletionRequest) -> PipelineResult<CompletionResponse>;
}
