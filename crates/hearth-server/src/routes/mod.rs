//! Hearth API Routes
//!
//! - /v1/chat/completions - OpenAI-compatible chat, tool calls executed on Home Assistant
//! - /health - Liveness
//! - /api-docs/openapi.json - OpenAPI document

pub mod chat;
pub mod health;
pub mod swagger;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

/// Full application router with shared state
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api-docs/openapi.json", get(swagger::openapi_json))
        .merge(chat::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
