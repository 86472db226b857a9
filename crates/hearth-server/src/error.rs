//! API Error Responses
//!
//! Maps bridge errors onto `{"error": ...}` bodies. Client errors name the
//! defect; everything else gets a generic message and is logged in full.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use hearth::BridgeError;

use crate::config::ConfigError;
use crate::models::ErrorResponse;

pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred.";

#[derive(Debug)]
pub struct ApiError(pub BridgeError);

impl From<BridgeError> for ApiError {
    fn from(err: BridgeError) -> Self {
        Self(err)
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        Self(BridgeError::Configuration(err.to_string()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = if self.0.is_client_error() {
            tracing::warn!("Rejected request: {}", self.0);
            (StatusCode::BAD_REQUEST, self.0.to_string())
        } else {
            tracing::error!("Request failed: {}", self.0);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE.to_string(),
            )
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let bad = ApiError(BridgeError::NoUserInput).into_response();
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);

        let upstream = ApiError(BridgeError::UpstreamAction("HTTP 401".into())).into_response();
        assert_eq!(upstream.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let config = ApiError::from(ConfigError::Missing("HA_ACCESS_TOKEN")).into_response();
        assert_eq!(config.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
