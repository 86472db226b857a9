//! Infrastructure Adapters
//!
//! reqwest implementations of the domain ports.

pub mod home_assistant;
pub mod llm_gateway;

use reqwest::Client;
use std::time::Duration;

use crate::config::Secret;

// Re-exports
pub use home_assistant::HttpHomeAssistant;
pub use llm_gateway::HttpLlmGateway;

/// Shared outbound client; one per process, cloned into each adapter
pub fn build_http_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("hearth/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Status line plus a bounded slice of the body, for server-side logs.
/// The adapter's own credential is masked in case the upstream echoes it.
async fn describe_failure(response: reqwest::Response, secret: &Secret) -> String {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Failed to read error body".to_string());
    format!("HTTP {}: {}", status, redacted_snippet(&body, secret))
}

fn redacted_snippet(body: &str, secret: &Secret) -> String {
    let masked = if secret.expose().is_empty() {
        body.to_string()
    } else {
        body.replace(secret.expose(), &secret.to_string())
    };
    masked.chars().take(512).collect()
}
