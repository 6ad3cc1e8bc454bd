use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
///
/// Reports service liveness plus whether the provider credential is present.
/// The prefix is an operator-diagnostic fragment (first 10 characters), a
/// deliberate low-risk debug leak rather than a security boundary.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let api_key = state.config.anthropic_api_key.as_deref();
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "api_key_configured": api_key.is_some(),
        "api_key_prefix": api_key.map(key_prefix),
    }))
}

fn key_prefix(key: &str) -> String {
    let head: String = key.chars().take(10).collect();
    format!("{head}...")
}
