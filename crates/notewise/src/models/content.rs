use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{PipelineError, PipelineResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageUrl {
    /// Either an http(s) locator or a `data:<mime>;base64,...` URI
    #[serde(deserialize_with = "non_empty")]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageContent {
    pub image_url: ImageUrl,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// One typed segment of a multimodal message
pub enum ContentPart {
    Text(TextContent),
    ImageUrl(ImageContent),
}

impl ContentPart {
    pub fn text<S: Into<String>>(text: S) -> Self {
        ContentPart::Text(TextContent { text: text.into() })
    }

    /// Image parts never carry an empty url
    pub fn image_url<S: Into<String>>(url: S) -> PipelineResult<Self> {
        let url = url.into();
        if url.is_empty() {
            return Err(PipelineError::InvalidRequest(
                "image url must not be empty".to_string(),
            ));
        }
        Ok(ContentPart::ImageUrl(ImageContent {
            image_url: ImageUrl { url },
        }))
    }

    /// Get the text if this is a text part
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentPart::Text(text) => Some(&text.text),
            _ => None,
        }
    }

    /// Get the url if this is an image part
    pub fn as_image_url(&self) -> Option<&str> {
        match self {
            ContentPart::ImageUrl(image) => Some(&image.image_url.url),
            _ => None,
        }
    }
}

fn non_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let url = String::deserialize(deserializer)?;
    if url.is_empty() {
        return Err(serde::de::Error::custom("image url must not be empty"));
    }
    Ok(url)
}
