//! Recovering a [`KnowledgeAnalysis`] from the model's free-text reply.
use crate::errors::{PipelineError, PipelineResult};
use crate::models::completion::CompletionResponse;
use crate::models::knowledge::KnowledgeAnalysis;
use crate::models::message::MessageContent;

/// Number of prerequisite and postrequisite points every analysis must carry
pub const RELATED_POINT_COUNT: usize = 5;

/// Text of the first choice, which must be plain text
pub fn reply_text(response: &CompletionResponse) -> PipelineResult<&str> {
    let choice = response
        .choices
        .first()
        .ok_or(PipelineError::EmptyUpstreamResponse)?;

    match &choice.message.content {
        MessageContent::Text(text) => Ok(text),
        MessageContent::Parts(_) => Err(PipelineError::UnexpectedContentShape),
    }
}

/// The span from the first `{` to the last `}`, inclusive.
///
/// Braces are not balanced, so prose containing stray braces or several separate objects
/// yields a span that will not decode. Without a usable pair the whole text is returned.
pub fn extract_json(text: &str) -> &str {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if end > start => &text[start..=end],
        _ => text,
    }
}

pub fn parse_knowledge_analysis(text: &str) -> PipelineResult<KnowledgeAnalysis> {
    let analysis: KnowledgeAnalysis =
        serde_json::from_str(extract_json(text)).map_err(|source| PipelineError::ResponseDecode {
            source,
            text: text.to_string(),
        })?;

    validate(&analysis)?;
    Ok(analysis)
}

/// Enforce the cardinality of the related point lists
pub fn validate(analysis: &KnowledgeAnalysis) -> PipelineResult<()> {
    check_count("prerequisites", analysis.prerequisites.len())?;
    check_count("postrequisites", analysis.postrequisites.len())
}

fn check_count(field: &'static str, actual: usize) -> PipelineResult<()> {
    if actual != RELATED_POINT_COUNT {
        return Err(PipelineError::SchemaValidation {
            field,
            expected: RELATED_POINT_COUNT,
            actual,
        });
    }
    Ok(())
}

/// Full image analysis path: pick the reply, extract, decode and validate it
pub fn knowledge_analysis_from(response: &CompletionResponse) -> PipelineResult<KnowledgeAnalysis> {
    parse_knowledge_analysis(reply_text(response)?)
}
