//! Bridge Configuration
//!
//! Read once from the environment at startup (a `.env` file is honored via
//! dotenvy) and handed to the adapters. Missing gateway settings do not stop
//! the server; they surface as a configuration error on the first chat
//! request.

use std::time::Duration;
use thiserror::Error;

pub const LLM_API_KEY: &str = "LLM_API_KEY";
pub const LLM_BASE_URL: &str = "LLM_BASE_URL";
pub const LLM_MODEL: &str = "LLM_MODEL";
pub const LLM_WORKSPACE: &str = "LLM_WORKSPACE";
pub const HA_BASE_URL: &str = "HA_BASE_URL";
pub const HA_ACCESS_TOKEN: &str = "HA_ACCESS_TOKEN";
pub const PORT: &str = "PORT";
pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";

/// Older deployments name the variables after AnythingLLM
const ALIASES: &[(&str, &str)] = &[
    (LLM_API_KEY, "ANYTHINGLLM_API_KEY"),
    (LLM_BASE_URL, "ANYTHINGLLM_URL"),
    (HA_BASE_URL, "HA_API_URL"),
];

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-v3-0324:free";
pub const DEFAULT_WORKSPACE: &str = "dnu";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// A credential that never prints its value
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Secret(****)")
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("****")
    }
}

/// LLM gateway (AnythingLLM workspace) settings
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub base_url: Option<String>,
    pub api_key: Option<Secret>,
    pub model: String,
    pub workspace: String,
}

/// Home Assistant REST API settings
#[derive(Debug, Clone)]
pub struct HomeAssistantConfig {
    /// API root, e.g. `http://homeassistant.local:8123/api`
    pub base_url: Option<String>,
    pub access_token: Option<Secret>,
}

/// Complete bridge configuration
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    pub port: u16,
    pub request_timeout: Duration,
    pub llm: LlmConfig,
    pub home_assistant: HomeAssistantConfig,
}

impl BridgeConfig {
    /// Load from process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &'static str| -> Option<String> {
            let alias = ALIASES
                .iter()
                .find(|(primary, _)| *primary == var)
                .map(|(_, alias)| *alias);

            lookup(var)
                .or_else(|| alias.and_then(&lookup))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match get(PORT) {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                var: PORT,
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match get(REQUEST_TIMEOUT_SECS) {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::Invalid {
                    var: REQUEST_TIMEOUT_SECS,
                    reason: format!("expected a positive number of seconds, got {raw:?}"),
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            port,
            request_timeout: Duration::from_secs(timeout_secs),
            llm: LlmConfig {
                base_url: get(LLM_BASE_URL).map(trim_base_url),
                api_key: get(LLM_API_KEY).map(Secret::new),
                model: get(LLM_MODEL).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                workspace: get(LLM_WORKSPACE).unwrap_or_else(|| DEFAULT_WORKSPACE.to_string()),
            },
            home_assistant: HomeAssistantConfig {
                base_url: get(HA_BASE_URL).map(trim_base_url),
                access_token: get(HA_ACCESS_TOKEN).map(Secret::new),
            },
        })
    }

    /// Required variables that are not set
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.llm.api_key.is_none() {
            missing.push(LLM_API_KEY);
        }
        if self.llm.base_url.is_none() {
            missing.push(LLM_BASE_URL);
        }
        if self.home_assistant.base_url.is_none() {
            missing.push(HA_BASE_URL);
        }
        if self.home_assistant.access_token.is_none() {
            missing.push(HA_ACCESS_TOKEN);
        }
        missing
    }
}

fn trim_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

/// Unwrap a required setting
pub fn require<T: Clone>(value: &Option<T>, var: &'static str) -> Result<T, ConfigError> {
    value.clone().ok_or(ConfigError::Missing(var))
}
