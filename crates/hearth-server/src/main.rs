use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod adapters;
mod application;
mod config;
mod error;
mod models;
mod routes;

use adapters::{build_http_client, HttpHomeAssistant, HttpLlmGateway};
use application::Translator;
use config::{BridgeConfig, ConfigError};
use hearth::ToolCatalog;

/// Translator wired to the HTTP gateways
pub type AppTranslator = Translator<HttpLlmGateway, HttpHomeAssistant>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    /// `Err` when a required gateway setting is missing; reported per request
    translator: Result<Arc<AppTranslator>, ConfigError>,
}

impl AppState {
    pub fn from_config(config: &BridgeConfig) -> anyhow::Result<Self> {
        let client = build_http_client(config.request_timeout)
            .context("Failed to build HTTP client")?;

        let translator = HttpLlmGateway::from_config(client.clone(), &config.llm).and_then(|llm| {
            let home = HttpHomeAssistant::from_config(client, &config.home_assistant)?;
            Ok(Arc::new(Translator::new(
                Arc::new(llm),
                Arc::new(home),
                ToolCatalog::builtin(),
            )))
        });

        Ok(Self { translator })
    }

    pub fn translator(&self) -> Result<&AppTranslator, ConfigError> {
        self.translator.as_deref().map_err(Clone::clone)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hearth=debug,hearth_server=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("👋 Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    tracing::info!("🏠 Hearth bridge initializing...");

    let config = BridgeConfig::from_env().context("Invalid configuration")?;

    let missing = config.missing();
    if missing.is_empty() {
        tracing::info!(
            "🔌 LLM gateway: {} (workspace {}, model {})",
            config.llm.base_url.as_deref().unwrap_or_default(),
            config.llm.workspace,
            config.llm.model
        );
        tracing::info!(
            "🏡 Home Assistant: {}",
            config.home_assistant.base_url.as_deref().unwrap_or_default()
        );
    } else {
        tracing::warn!(
            "⚠️  Missing {} - chat requests will fail until configured",
            missing.join(", ")
        );
    }

    let state = AppState::from_config(&config)?;
    let router = routes::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("📚 OpenAPI: /api-docs/openapi.json");
    tracing::info!("✅ Hearth bridge listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}
