#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every failure is caught at the request boundary and rendered as the
/// standard envelope `{"error": {"code", "message"}}`; nothing propagates as
/// a process crash and nothing is retried at this layer.
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller-supplied input rejected before any provider call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The provider credential was absent at startup.
    #[error("ANTHROPIC_API_KEY is not configured")]
    MissingApiKey,

    /// The external completion call failed (auth, quota, network, malformed
    /// request). Carries the provider-reported detail.
    #[error("Provider error: {0}")]
    Provider(String),

    /// The provider's text was not parseable JSON.
    #[error("Response parse error: {0}")]
    ResponseParse(String),

    /// The provider's JSON parsed but lacks required keys.
    #[error("Response shape error: {0}")]
    ResponseShape(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::MissingApiKey => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIGURATION_ERROR",
                "ANTHROPIC_API_KEY not configured. Set it in the service environment.".to_string(),
            ),
            AppError::Provider(msg) => {
                tracing::error!("Provider error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PROVIDER_ERROR",
                    format!("Completion provider error: {msg}"),
                )
            }
            AppError::ResponseParse(msg) => {
                tracing::error!("Response parse error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PARSE_ERROR",
                    format!("JSON parsing error: {msg}"),
                )
            }
            AppError::ResponseShape(msg) => {
                tracing::error!("Response shape error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SHAPE_ERROR",
                    msg.clone(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    format!("Server error: {e}"),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_validation_maps_to_400() {
        let response = AppError::Validation("too short".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_missing_api_key_maps_to_500() {
        let response = AppError::MissingApiKey.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_shape_error_maps_to_500() {
        let response =
            AppError::ResponseShape("missing required keys: summary".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
