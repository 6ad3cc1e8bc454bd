//! Axum route handlers for the Tailoring API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::llm_client::extract_json_payload;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::state::AppState;
use crate::tailoring::prompts::build_tailoring_prompt;
use crate::tailoring::result::{validate_shape, TailoringResult};

/// Minimum trimmed job-description length accepted by the analyze endpoint.
const MIN_JD_CHARS: usize = 50;
/// How much raw model output to log when JSON parsing fails.
const RAW_LOG_LIMIT: usize = 500;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

fn default_company_name() -> String {
    "Company".to_string()
}

fn default_role_title() -> String {
    "AI_Engineer".to_string()
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub job_description: String,
    #[serde(default = "default_company_name")]
    pub company_name: String,
    #[serde(default = "default_role_title")]
    pub role_title: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: TailoringResult,
    pub company_name: String,
    pub role_title: String,
    pub version: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handler
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/analyze
///
/// Analyzes a job description and returns tailored resume content.
/// Exactly one outbound provider call per request, synchronously awaited.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let trimmed = request.job_description.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    if trimmed.chars().count() < MIN_JD_CHARS {
        return Err(AppError::Validation(format!(
            "job_description must be at least {MIN_JD_CHARS} characters"
        )));
    }

    let llm = state.llm.as_ref().ok_or(AppError::MissingApiKey)?;

    let prompt = build_tailoring_prompt(
        &request.job_description,
        &request.company_name,
        &request.role_title,
    );
    debug!("Tailoring prompt rendered ({} chars)", prompt.chars().count());

    let raw = llm
        .complete(&prompt, JSON_ONLY_SYSTEM)
        .await
        .map_err(|e| AppError::Provider(e.to_string()))?;

    let payload = extract_json_payload(&raw);
    let parsed: Value = serde_json::from_str(payload).map_err(|e| {
        warn!(
            "Model response is not valid JSON: {e}; raw head: {}",
            truncate_chars(&raw, RAW_LOG_LIMIT)
        );
        AppError::ResponseParse(e.to_string())
    })?;

    let object = parsed
        .as_object()
        .ok_or_else(|| AppError::ResponseParse("expected a top-level JSON object".to_string()))?;
    validate_shape(object).map_err(|missing| {
        AppError::ResponseShape(format!("Missing required fields: {}", missing.join(", ")))
    })?;

    let analysis: TailoringResult =
        serde_json::from_value(parsed).map_err(|e| AppError::ResponseParse(e.to_string()))?;

    info!(
        company = %request.company_name,
        role = %request.role_title,
        "Tailoring analysis complete"
    );

    Ok(Json(AnalyzeResponse {
        success: true,
        analysis,
        company_name: request.company_name,
        role_title: request.role_title,
        version: env!("CARGO_PKG_VERSION"),
    }))
}

/// Truncates to a character budget without splitting a UTF-8 code point.
fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
