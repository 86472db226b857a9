//! Chat Completion Route
//!
//! The endpoint the conversation agent talks to. The body is read raw so
//! that shape errors come back as `{"error": ...}` rather than axum's own
//! rejection text.

use axum::{body::Bytes, extract::State, routing::post, Json, Router};

use hearth::ChatRequest;

use crate::error::ApiError;
use crate::models::{ChatCompletionRequest, ChatCompletionResponse, ErrorResponse};
use crate::AppState;

/// Answer the latest user message, executing a tool call if the model makes one
#[utoipa::path(
    post,
    path = "/v1/chat/completions",
    request_body = ChatCompletionRequest,
    responses(
        (status = 200, description = "Assistant reply (\"Done.\" after a tool call)", body = ChatCompletionResponse),
        (status = 400, description = "Malformed body or no user message", body = ErrorResponse),
        (status = 500, description = "Upstream, configuration or internal failure", body = ErrorResponse)
    ),
    tag = "Chat"
)]
pub async fn chat_completions(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatCompletionResponse>, ApiError> {
    let request = ChatRequest::from_slice(&body)?;
    let user_input = request.last_user_input()?;
    let translator = state.translator()?;

    tracing::info!(
        "Chat request ({} messages, {} chars of user input)",
        request.messages.len(),
        user_input.chars().count()
    );

    let reply = translator.respond(&user_input).await?;
    Ok(Json(reply.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/chat/completions", post(chat_completions))
}
