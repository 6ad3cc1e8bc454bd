use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::state::AppState;

/// GET /
///
/// Serves the frontend landing page when one is deployed alongside the
/// service, otherwise a minimal JSON status payload.
pub async fn root_handler(State(state): State<AppState>) -> Response {
    match tokio::fs::read_to_string(&state.config.static_index).await {
        Ok(page) => Html(page).into_response(),
        Err(_) => Json(json!({
            "message": "AI Resume Tailor API",
            "status": "running"
        }))
        .into_response(),
    }
}
