use serde::{Deserialize, Deserializer, Serialize};

use super::role::Role;

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KnowledgePoint {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Expected in `[0, 1]`, not enforced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FunExample {
    /// Should match the id of one of the key points
    #[serde(deserialize_with = "null_as_default")]
    pub knowledge_point_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Structured explanation of the knowledge shown in an image
pub struct KnowledgeAnalysis {
    #[serde(deserialize_with = "null_as_default")]
    pub detailed_explanation: String,
    #[serde(deserialize_with = "null_as_default")]
    pub key_points: Vec<KnowledgePoint>,
    #[serde(deserialize_with = "null_as_default")]
    pub fun_examples: Vec<FunExample>,
    #[serde(deserialize_with = "null_as_default")]
    pub prerequisites: Vec<KnowledgePoint>,
    #[serde(deserialize_with = "null_as_default")]
    pub postrequisites: Vec<KnowledgePoint>,
    #[serde(deserialize_with = "null_as_default")]
    pub conclusion: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Also assumed when a history entry names no sender
    #[default]
    User,
    #[serde(other)]
    Ai,
}

impl Sender {
    /// The chat role this sender speaks as
    pub fn role(self) -> Role {
        match self {
            Sender::User => Role::User,
            Sender::Ai => Role::Assistant,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One entry of the conversation history supplied by the caller
pub struct DialogueTurn {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub sender: Sender,
    pub content: String,
    #[serde(default)]
    pub timestamp: String,
}

impl DialogueTurn {
    pub fn new<S: Into<String>>(sender: Sender, content: S) -> Self {
        Self {
            id: String::new(),
            sender,
            content: content.into(),
            timestamp: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueReply {
    pub message: String,
    /// RFC 3339
    pub timestamp: String,
}
