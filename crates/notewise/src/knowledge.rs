use chrono::{SecondsFormat, Utc};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use crate::conversation::{dialogue_messages, image_analysis_messages, image_mime_type};
use crate::errors::{PipelineError, PipelineResult};
use crate::extract::{knowledge_analysis_from, reply_text};
use crate::models::completion::{CompletionRequest, CompletionResponse};
use crate::models::knowledge::{DialogueReply, DialogueTurn, KnowledgeAnalysis};
use crate::models::message::Message;
use crate::prompt::DEFAULT_SYSTEM_PROMPT;
use crate::providers::base::Provider;
use crate::topics::{StaticTopics, TopicLookup};

pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Reject uploads the analysis path cannot handle
pub fn validate_upload(filename: &str, size: usize) -> PipelineResult<()> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    if !ALLOWED_IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        return Err(PipelineError::InvalidRequest(format!(
            "unsupported image format '{}', expected one of: {}",
            filename,
            ALLOWED_IMAGE_EXTENSIONS.join(", ")
        )));
    }
    if size > MAX_IMAGE_BYTES {
        return Err(PipelineError::InvalidRequest(format!(
            "image is {} bytes, the limit is {} bytes",
            size, MAX_IMAGE_BYTES
        )));
    }
    Ok(())
}

/// Entry point for both domain requests. Every call makes exactly one provider call.
pub struct KnowledgeService {
    provider: Arc<dyn Provider>,
    topics: Arc<dyn TopicLookup>,
}

impl KnowledgeService {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self::with_topics(provider, Arc::new(StaticTopics))
    }

    pub fn with_topics(provider: Arc<dyn Provider>, topics: Arc<dyn TopicLookup>) -> Self {
        Self { provider, topics }
    }

    pub async fn analyze_image(&self, image: &[u8], filename: &str) -> PipelineResult<KnowledgeAnalysis> {
        info!(filename, size = image.len(), "analysing image");

        let messages = image_analysis_messages(image, image_mime_type(filename))?;
        let response = self.provider.complete(CompletionRequest::new(messages)).await?;
        let analysis = knowledge_analysis_from(&response).inspect_err(|e| {
            warn!(filename, error = %e, "could not extract knowledge analysis");
        })?;

        info!(
            filename,
            key_points = analysis.key_points.len(),
            "image analysis complete"
        );
        Ok(analysis)
    }

    pub async fn dialogue(
        &self,
        topic_id: &str,
        user_message: &str,
        history: &[DialogueTurn],
    ) -> PipelineResult<DialogueReply> {
        let topic = self.topics.resolve(topic_id);
        info!(
            topic_id,
            title = %topic.title,
            history = history.len(),
            "continuing dialogue"
        );

        let messages = dialogue_messages(&topic, history, user_message);
        let response = self.provider.complete(CompletionRequest::new(messages)).await?;

        Ok(DialogueReply {
            message: reply_text(&response)?.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        })
    }

    /// Forward a caller-built request unchanged
    pub async fn chat(&self, request: CompletionRequest) -> PipelineResult<CompletionResponse> {
        self.provider.complete(request).await
    }

    /// A single user message behind the default system prompt
    pub async fn simple_chat(&self, message: &str, model: Option<&str>) -> PipelineResult<CompletionResponse> {
        let mut request =
            CompletionRequest::new(vec![Message::system(DEFAULT_SYSTEM_PROMPT), Message::user(message)]);
        if let Some(model) = model {
            request = request.with_model(model);
        }
        self.provider.complete(request).await
    }
}
