use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::Path;

use crate::errors::PipelineResult;
use crate::models::knowledge::DialogueTurn;
use crate::models::message::Message;
use crate::models::role::Role;
use crate::prompt::{dialogue_system_prompt, image_analysis_system_prompt, image_analysis_user_prompt};
use crate::topics::Topic;

/// Mime type for an uploaded image, judged by its file extension
pub fn image_mime_type(filename: &str) -> &'static str {
    let extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    }
}

pub fn data_uri(bytes: &[u8], mime_type: &str) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// One-shot request asking the model to explain an image
pub fn image_analysis_messages(image: &[u8], mime_type: &str) -> PipelineResult<Vec<Message>> {
    Ok(vec![
        Message::system(image_analysis_system_prompt()),
        Message::image(
            Role::User,
            image_analysis_user_prompt(),
            data_uri(image, mime_type),
        )?,
    ])
}

/// System prompt, then the history oldest first, then the new user message.
///
/// History is passed through in full, nothing is trimmed or summarized.
pub fn dialogue_messages(topic: &Topic, history: &[DialogueTurn], user_message: &str) -> Vec<Message> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(Message::system(dialogue_system_prompt(
        &topic.title,
        &topic.description,
    )));
    messages.extend(
        history
            .iter()
            .map(|turn| Message::text(turn.sender.role(), turn.content.clone())),
    );
    messages.push(Message::user(user_message));
    messages
}
