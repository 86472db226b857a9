//! AnythingLLM Workspace Gateway
//!
//! POSTs OpenAI-style chat requests to `{base}/v1/workspace/{slug}/chat`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use hearth::{AssistantMessage, BridgeError, LlmGateway, LlmRequest};

use super::describe_failure;
use crate::config::{require, ConfigError, LlmConfig, Secret, LLM_API_KEY, LLM_BASE_URL};

/// HTTP implementation of LlmGateway
pub struct HttpLlmGateway {
    client: Client,
    endpoint: String,
    api_key: Secret,
    model: String,
}

#[derive(Deserialize)]
struct GatewayResponse {
    #[serde(default)]
    choices: Vec<GatewayChoice>,
}

#[derive(Deserialize)]
struct GatewayChoice {
    message: AssistantMessage,
}

impl HttpLlmGateway {
    pub fn new(
        client: Client,
        base_url: &str,
        workspace: &str,
        api_key: Secret,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: format!(
                "{}/v1/workspace/{}/chat",
                base_url.trim_end_matches('/'),
                workspace
            ),
            api_key,
            model: model.into(),
        }
    }

    pub fn from_config(client: Client, config: &LlmConfig) -> Result<Self, ConfigError> {
        let base_url = require(&config.base_url, LLM_BASE_URL)?;
        let api_key = require(&config.api_key, LLM_API_KEY)?;
        Ok(Self::new(
            client,
            &base_url,
            &config.workspace,
            api_key,
            config.model.clone(),
        ))
    }
}

#[async_trait]
impl LlmGateway for HttpLlmGateway {
    async fn chat(&self, request: &LlmRequest) -> Result<AssistantMessage, BridgeError> {
        tracing::debug!(
            "Sending chat to {} ({} tools, model {})",
            self.endpoint,
            request.tools.len(),
            request.model
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose())
            .json(request)
            .send()
            .await
            .map_err(|e| BridgeError::UpstreamLlm(e.without_url().to_string()))?;

        if !response.status().is_success() {
            return Err(BridgeError::UpstreamLlm(describe_failure(response, &self.api_key).await));
        }

        let payload: GatewayResponse = response
            .json()
            .await
            .map_err(|e| {
                BridgeError::UpstreamLlm(format!("Unreadable response: {}", e.without_url()))
            })?;

        payload
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .ok_or_else(|| BridgeError::UpstreamLlm("Response contained no choices".to_string()))
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}
