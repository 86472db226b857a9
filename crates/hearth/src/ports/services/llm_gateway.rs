//! LLM Gateway Port
//!
//! Abstract interface for the language-model workspace chat endpoint.
//! The gateway speaks an OpenAI-compatible dialect: messages in, one
//! assistant message (possibly carrying tool calls) out.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::{ToolCall, ToolSpec};
use crate::domain::errors::BridgeError;
use crate::domain::value_objects::MessageRole;

/// A message sent to the model
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Outbound chat request
#[derive(Debug, Clone, Serialize)]
pub struct LlmRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub tools: Vec<ToolSpec>,
}

/// The first choice's message from the gateway.
///
/// Tool calls are kept undecoded; only the first one is ever parsed, so a
/// malformed trailing call cannot fail the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssistantMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tool_calls: Option<Vec<Value>>,
}

impl AssistantMessage {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            tool_calls: None,
        }
    }

    pub fn with_tool_calls(calls: Vec<Value>) -> Self {
        Self {
            content: None,
            tool_calls: Some(calls),
        }
    }

    pub fn tool_call_count(&self) -> usize {
        self.tool_calls.as_ref().map_or(0, Vec::len)
    }

    /// Decode the first tool call, if any
    pub fn first_tool_call(&self) -> Result<Option<ToolCall>, BridgeError> {
        let Some(first) = self.tool_calls.as_ref().and_then(|calls| calls.first()) else {
            return Ok(None);
        };

        serde_json::from_value(first.clone())
            .map(Some)
            .map_err(|e| BridgeError::UpstreamLlm(format!("Malformed tool call: {e}")))
    }
}

/// Language-model gateway interface
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send one chat request and return the first choice's message
    async fn chat(&self, request: &LlmRequest) -> Result<AssistantMessage, BridgeError>;

    /// Model identifier requests are built for
    fn model_id(&self) -> &str;
}
