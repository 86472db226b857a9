//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use axum::Json;
use utoipa::OpenApi;

use crate::models::{
    ChatCompletionRequest, ChatCompletionResponse, CompletionChoice, CompletionMessage,
    ErrorResponse, RequestMessage,
};

use super::health::HealthCheck;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::chat::chat_completions,
        super::health::health_check,
    ),
    info(
        title = "Hearth Bridge API",
        version = "0.1.0",
        description = "OpenAI-compatible chat endpoint that lets a hosted LLM control Home Assistant through tool calls.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Chat", description = "Chat completions bridged to the LLM gateway and Home Assistant"),
    ),
    components(
        schemas(
            // Chat
            ChatCompletionRequest,
            RequestMessage,
            ChatCompletionResponse,
            CompletionChoice,
            CompletionMessage,
            ErrorResponse,
            // Health
            HealthCheck,
        )
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
