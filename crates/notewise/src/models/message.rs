use super::content::ContentPart;
use super::role::Role;
use crate::errors::PipelineResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
/// The body of a message: a bare string on the wire, or an array of typed parts
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

impl MessageContent {
    /// Get the text if this is plain text content
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MessageContent::Text(text) => Some(text),
            MessageContent::Parts(_) => None,
        }
    }

    pub fn as_parts(&self) -> Option<&[ContentPart]> {
        match self {
            MessageContent::Parts(parts) => Some(parts),
            MessageContent::Text(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A single turn sent to or received from the LLM
pub struct Message {
    pub role: Role,
    pub content: MessageContent,
}

impl Message {
    /// Create a plain text message
    pub fn text<S: Into<String>>(role: Role, text: S) -> Self {
        Message {
            role,
            content: MessageContent::Text(text.into()),
        }
    }

    /// Create a multimodal message with a caption followed by an image.
    ///
    /// The caption always comes first, the endpoint reads the text part as the
    /// instruction for the image that follows it.
    pub fn image<S: Into<String>, U: Into<String>>(
        role: Role,
        text: S,
        image_url: U,
    ) -> PipelineResult<Self> {
        Ok(Message {
            role,
            content: MessageContent::Parts(vec![
                ContentPart::text(text),
                ContentPart::image_url(image_url)?,
            ]),
        })
    }

    pub fn system<S: Into<String>>(text: S) -> Self {
        Self::text(Role::System, text)
    }

    pub fn user<S: Into<String>>(text: S) -> Self {
        Self::text(Role::User, text)
    }

    pub fn assistant<S: Into<String>>(text: S) -> Self {
        Self::text(Role::Assistant, text)
    }

    /// Get the text if this message carries plain text content
    pub fn as_text(&self) -> Option<&str> {
        self.content.as_text()
    }
}
