use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::base::Provider;
use super::configs::OpenAiProviderConfig;
use crate::errors::{PipelineError, PipelineResult};
use crate::models::completion::{CompletionRequest, CompletionResponse};

pub struct OpenAiProvider {
    client: Client,
    config: OpenAiProviderConfig,
}

impl OpenAiProvider {
    pub fn new(config: OpenAiProviderConfig) -> PipelineResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { client, config })
    }

    /// Check request invariants and fill in configured defaults
    fn prepare(&self, mut request: CompletionRequest) -> PipelineResult<CompletionRequest> {
        if request.messages.is_empty() {
            return Err(PipelineError::InvalidRequest(
                "at least one message is required".to_string(),
            ));
        }
        if request.stream {
            return Err(PipelineError::InvalidRequest(
                "streaming responses are not supported".to_string(),
            ));
        }

        if request.model.is_empty() {
            request.model = self.config.model.clone();
        }
        request.temperature = request.temperature.or(self.config.temperature);
        request.max_tokens = request.max_tokens.or(self.config.max_tokens);

        Ok(request)
    }

    async fn post(&self, request: &CompletionRequest) -> PipelineResult<CompletionResponse> {
        let url = format!(
            "{}/chat/completions",
            self.config.host.trim_end_matches('/')
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(PipelineError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body)
            .map_err(|source| PipelineError::MalformedUpstreamResponse { source, body })
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    async fn complete(&self, request: CompletionRequest) -> PipelineResult<CompletionResponse> {
        let request = self.prepare(request)?;
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            "sending completion request"
        );

        let response = self.post(&request).await?;
        debug!(
            id = %response.id,
            choices = response.choices.len(),
            total_tokens = response.usage.total_tokens,
            "received completion response"
        );

        Ok(response)
    }
}
