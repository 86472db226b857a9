//! Home Assistant REST Adapter
//!
//! Invokes services via `POST {api}/services/{domain}/{service}`.

use async_trait::async_trait;
use reqwest::Client;

use hearth::{BridgeError, HomeAutomation, ServiceInvocation};

use super::describe_failure;
use crate::config::{
    require, ConfigError, HomeAssistantConfig, Secret, HA_ACCESS_TOKEN, HA_BASE_URL,
};

/// HTTP implementation of HomeAutomation
pub struct HttpHomeAssistant {
    client: Client,
    base_url: String,
    access_token: Secret,
}

impl HttpHomeAssistant {
    pub fn new(client: Client, base_url: &str, access_token: Secret) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
        }
    }

    pub fn from_config(client: Client, config: &HomeAssistantConfig) -> Result<Self, ConfigError> {
        let base_url = require(&config.base_url, HA_BASE_URL)?;
        let access_token = require(&config.access_token, HA_ACCESS_TOKEN)?;
        Ok(Self::new(client, &base_url, access_token))
    }

    fn service_url(&self, invocation: &ServiceInvocation) -> String {
        format!("{}/{}", self.base_url, invocation.target.path())
    }
}

#[async_trait]
impl HomeAutomation for HttpHomeAssistant {
    async fn call_service(&self, invocation: &ServiceInvocation) -> Result<(), BridgeError> {
        let response = self
            .client
            .post(self.service_url(invocation))
            .bearer_auth(self.access_token.expose())
            .json(&invocation.data)
            .send()
            .await
            .map_err(|e| BridgeError::UpstreamAction(e.without_url().to_string()))?;

        if !response.status().is_success() {
            return Err(BridgeError::UpstreamAction(format!(
                "{} returned {}",
                invocation.target,
                describe_failure(response, &self.access_token).await
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth::ServiceTarget;
    use httptest::{matchers::*, responders::*, Expectation, Server};
    use serde_json::{json, Map, Value};
    use std::time::Duration;

    fn home(server: &Server) -> HttpHomeAssistant {
        let client = crate::adapters::build_http_client(Duration::from_secs(5)).unwrap();
        HttpHomeAssistant::new(client, &server.url_str("/api"), Secret::new("ha-token"))
    }

    fn invocation(target: ServiceTarget, data: Value) -> ServiceInvocation {
        let data: Map<String, Value> = data.as_object().cloned().unwrap();
        ServiceInvocation::new("test_tool", target, data)
    }

    #[tokio::test]
    async fn test_posts_data_to_service_endpoint() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/api/services/light/turn_on"),
                request::headers(contains(("authorization", "Bearer ha-token"))),
                request::body(json_decoded(eq(json!({"entity_id": "light.kitchen_lights"})))),
            ])
            .respond_with(json_encoded(json!([{"entity_id": "light.kitchen_lights", "state": "on"}]))),
        );

        home(&server)
            .call_service(&invocation(
                ServiceTarget::new("light", "turn_on"),
                json!({"entity_id": "light.kitchen_lights"}),
            ))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_non_success_is_upstream_action_error() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/api/services/switch/turn_off"))
                .respond_with(status_code(400).body("Service not found for token ha-token")),
        );

        let err = home(&server)
            .call_service(&invocation(
                ServiceTarget::new("switch", "turn_off"),
                json!({"entity_id": "switch.kettle"}),
            ))
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(matches!(err, BridgeError::UpstreamAction(_)));
        assert!(message.contains("switch.turn_off"));
        assert!(!message.contains("ha-token"));
    }

    #[test]
    fn test_from_config_requires_token() {
        let client = crate::adapters::build_http_client(Duration::from_secs(5)).unwrap();
        let config = HomeAssistantConfig {
            base_url: Some("http://ha.local/api".to_string()),
            access_token: None,
        };
        assert_eq!(
            HttpHomeAssistant::from_config(client, &config).err(),
            Some(ConfigError::Missing(HA_ACCESS_TOKEN))
        );
    }
}
