//! Chat Entities
//!
//! Inbound chat-completion request and the reply produced for it.

use serde::{Deserialize, Serialize};

use crate::domain::errors::BridgeError;
use crate::domain::value_objects::MessageRole;

/// Reply sent after a tool call was dispatched successfully
pub const CONFIRMATION_TEXT: &str = "Done.";

/// Reply used when the model returns neither text nor a tool call
pub const FALLBACK_TEXT: &str = "I am not sure how to respond to that.";

/// Inbound chat-completion request.
///
/// Only `messages` is read; other OpenAI request fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
}

/// A single message of the inbound conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    #[serde(default)]
    pub content: Option<MessageContent>,
}

/// Message content: plain text or OpenAI content parts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPart {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl MessageContent {
    /// Text of the message; text parts are joined with newlines and
    /// non-text parts (images, audio) are skipped.
    pub fn text(&self) -> String {
        match self {
            MessageContent::Text(text) => text.clone(),
            MessageContent::Parts(parts) => parts
                .iter()
                .filter(|part| part.kind == "text")
                .filter_map(|part| part.text.as_deref())
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

impl Message {
    pub fn text(&self) -> String {
        self.content
            .as_ref()
            .map(MessageContent::text)
            .unwrap_or_default()
    }
}

impl ChatRequest {
    /// Parse a raw request body, rejecting anything that is not a
    /// `{"messages": [{"role": ..}, ..]}` document.
    pub fn from_slice(body: &[u8]) -> Result<Self, BridgeError> {
        serde_json::from_slice(body).map_err(|e| BridgeError::MalformedRequest(e.to_string()))
    }

    /// Content of the most recent user message.
    ///
    /// Earlier user messages are never consulted, even if the latest one
    /// is empty.
    pub fn last_user_input(&self) -> Result<String, BridgeError> {
        let message = self
            .messages
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::User)
            .ok_or(BridgeError::NoUserInput)?;

        let text = message.text();
        if text.trim().is_empty() {
            return Err(BridgeError::NoUserInput);
        }
        Ok(text)
    }
}

/// The assistant reply for one bridged request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatResponse {
    pub content: String,
}

impl ChatResponse {
    /// Confirmation for a dispatched tool call
    pub fn done() -> Self {
        Self {
            content: CONFIRMATION_TEXT.to_string(),
        }
    }

    /// The model's own answer, passed through verbatim
    pub fn text(content: Option<String>) -> Self {
        Self {
            content: content.unwrap_or_else(|| FALLBACK_TEXT.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Result<ChatRequest, BridgeError> {
        ChatRequest::from_slice(value.to_string().as_bytes())
    }

    #[test]
    fn test_last_user_message_wins() {
        let request = parse(json!({
            "model": "ignored",
            "messages": [
                {"role": "system", "content": "You are Home Assistant"},
                {"role": "user", "content": "turn on the hallway"},
                {"role": "assistant", "content": "Done."},
                {"role": "user", "content": "now the kitchen lights"}
            ]
        }))
        .unwrap();

        assert_eq!(request.last_user_input().unwrap(), "now the kitchen lights");
    }

    #[test]
    fn test_no_user_message() {
        let request = parse(json!({
            "messages": [{"role": "system", "content": "prompt"}]
        }))
        .unwrap();
        assert!(matches!(
            request.last_user_input(),
            Err(BridgeError::NoUserInput)
        ));

        let empty = parse(json!({"messages": []})).unwrap();
        assert!(matches!(empty.last_user_input(), Err(BridgeError::NoUserInput)));
    }

    #[test]
    fn test_empty_latest_user_message_is_not_skipped() {
        let request = parse(json!({
            "messages": [
                {"role": "user", "content": "turn on the lights"},
                {"role": "user", "content": "   "}
            ]
        }))
        .unwrap();
        assert!(matches!(
            request.last_user_input(),
            Err(BridgeError::NoUserInput)
        ));

        let null_content = parse(json!({"messages": [{"role": "user", "content": null}]})).unwrap();
        assert!(matches!(
            null_content.last_user_input(),
            Err(BridgeError::NoUserInput)
        ));
    }

    #[test]
    fn test_content_parts_are_joined() {
        let request = parse(json!({
            "messages": [{
                "role": "user",
                "content": [
                    {"type": "text", "text": "dim the"},
                    {"type": "image_url", "image_url": {"url": "http://x"}},
                    {"type": "text", "text": "desk lamp"}
                ]
            }]
        }))
        .unwrap();

        assert_eq!(request.last_user_input().unwrap(), "dim the\ndesk lamp");
    }

    #[test]
    fn test_malformed_bodies() {
        assert!(matches!(
            ChatRequest::from_slice(b"{not json"),
            Err(BridgeError::MalformedRequest(_))
        ));
        assert!(matches!(
            parse(json!({"prompt": "hi"})),
            Err(BridgeError::MalformedRequest(_))
        ));
        assert!(matches!(
            parse(json!({"messages": [{"content": "no role"}]})),
            Err(BridgeError::MalformedRequest(_))
        ));
        assert!(matches!(
            parse(json!({"messages": "hi"})),
            Err(BridgeError::MalformedRequest(_))
        ));
    }

    #[test]
    fn test_response_constructors() {
        assert_eq!(ChatResponse::done().content, "Done.");
        assert_eq!(
            ChatResponse::text(Some("It is 21 degrees".into())).content,
            "It is 21 degrees"
        );
        assert_eq!(ChatResponse::text(None).content, FALLBACK_TEXT);
    }
}
