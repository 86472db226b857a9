//! Chat Completion Envelopes
//!
//! The calling conversation agent parses this exact shape; do not add
//! fields.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use hearth::ChatResponse;

/// Inbound chat-completion request (documentation schema; bodies are
/// parsed by `hearth::ChatRequest`)
#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatCompletionRequest {
    pub messages: Vec<RequestMessage>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RequestMessage {
    #[schema(example = "user")]
    pub role: String,
    #[schema(example = "Turn on the kitchen lights")]
    pub content: String,
}

/// OpenAI-compatible completion response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatCompletionResponse {
    pub id: String,
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CompletionChoice {
    #[schema(example = "stop")]
    pub finish_reason: String,
    pub index: u32,
    pub message: CompletionMessage,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CompletionMessage {
    #[schema(example = "assistant")]
    pub role: String,
    #[schema(example = "Done.")]
    pub content: String,
}

/// Error body for every non-200 response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<ChatResponse> for ChatCompletionResponse {
    fn from(reply: ChatResponse) -> Self {
        Self {
            id: format!("chatcmpl-{}", Uuid::new_v4().simple()),
            choices: vec![CompletionChoice {
                finish_reason: "stop".to_string(),
                index: 0,
                message: CompletionMessage {
                    role: "assistant".to_string(),
                    content: reply.content,
                },
            }],
        }
    }
}
