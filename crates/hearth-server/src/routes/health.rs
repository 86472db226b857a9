//! Health Check

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
    pub version: String,
}

/// Liveness probe; does not contact either gateway
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is running", body = HealthCheck)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Hearth bridge is running - tool calls flow to Home Assistant".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
