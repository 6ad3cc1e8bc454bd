//! Tailoring Result — the structured object parsed from the model's response.
//!
//! The contract is key PRESENCE only: required fields are explicit in the
//! type, but their values stay `serde_json::Value` — the provider owns value
//! types and substructure, and extra keys it returns are preserved verbatim
//! through `#[serde(flatten)]`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level keys the model must return.
pub const REQUIRED_KEYS: [&str; 8] = [
    "summary",
    "technical_skills",
    "experience_bullets_jefferies",
    "experience_bullets_experian",
    "project_descriptions",
    "keywords",
    "detected_category",
    "core_focus_areas",
];

/// The model's self-classification of the posting.
/// Only `primary` is required; `confidence`/`signals` pass through in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedCategory {
    pub primary: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The validated tailoring payload returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TailoringResult {
    pub summary: Value,
    pub technical_skills: Value,
    pub experience_bullets_jefferies: Value,
    pub experience_bullets_experian: Value,
    pub project_descriptions: Value,
    pub keywords: Value,
    pub detected_category: DetectedCategory,
    pub core_focus_areas: Value,
    /// Anything else the model returned, passed through unmodified.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Checks the parsed object for every required key, collecting ALL misses so
/// the error can name each one (serde would stop at the first).
/// Also checks the nested `detected_category.primary` key.
pub fn validate_shape(object: &Map<String, Value>) -> Result<(), Vec<String>> {
    let mut missing: Vec<String> = REQUIRED_KEYS
        .iter()
        .filter(|key| !object.contains_key(**key))
        .map(|key| key.to_string())
        .collect();

    match object.get("detected_category") {
        Some(Value::Object(category)) if category.contains_key("primary") => {}
        Some(_) => missing.push("detected_category.primary".to_string()),
        None => {} // already reported as a missing top-level key
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn complete_analysis() -> Value {
        json!({
            "summary": "Seasoned AI/ML engineer focused on production LLM systems.",
            "technical_skills": ["Programming & Development: Python, C++"],
            "experience_bullets_jefferies": ["Designed RAG-based document retrieval"],
            "experience_bullets_experian": ["Developed ML-based fraud detection"],
            "project_descriptions": ["Multi-agent code review platform"],
            "keywords": ["RAG", "LangChain", "PyTorch"],
            "role_focus": "Production LLM engineering.",
            "detected_category": {
                "primary": "GenAI_LLM_Specialist",
                "confidence": "high",
                "signals": ["RAG", "LangChain"]
            },
            "core_focus_areas": "RAG Systems | LLM Applications | Production Deployment"
        })
    }

    #[test]
    fn test_complete_object_passes_validation() {
        let value = complete_analysis();
        assert!(validate_shape(value.as_object().unwrap()).is_ok());
    }

    #[test]
    fn test_single_missing_key_is_named() {
        let mut value = complete_analysis();
        value.as_object_mut().unwrap().remove("summary");
        let missing = validate_shape(value.as_object().unwrap()).unwrap_err();
        assert_eq!(missing, vec!["summary".to_string()]);
    }

    #[test]
    fn test_all_missing_keys_are_named() {
        let mut value = complete_analysis();
        let object = value.as_object_mut().unwrap();
        object.remove("summary");
        object.remove("keywords");
        let missing = validate_shape(value.as_object().unwrap()).unwrap_err();
        assert!(missing.contains(&"summary".to_string()));
        assert!(missing.contains(&"keywords".to_string()));
        assert_eq!(missing.len(), 2);
    }

    #[test]
    fn test_category_without_primary_is_rejected() {
        let mut value = complete_analysis();
        value["detected_category"] = json!({"confidence": "low"});
        let missing = validate_shape(value.as_object().unwrap()).unwrap_err();
        assert_eq!(missing, vec!["detected_category.primary".to_string()]);
    }

    #[test]
    fn test_non_object_category_is_rejected() {
        let mut value = complete_analysis();
        value["detected_category"] = json!("GenAI_LLM_Specialist");
        let missing = validate_shape(value.as_object().unwrap()).unwrap_err();
        assert_eq!(missing, vec!["detected_category.primary".to_string()]);
    }

    #[test]
    fn test_result_round_trips_with_extra_keys() {
        let mut value = complete_analysis();
        value["ats_score"] = json!(91);
        let result: TailoringResult = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(result.extra["ats_score"], json!(91));
        assert_eq!(serde_json::to_value(&result).unwrap(), value);
    }

    #[test]
    fn test_value_types_are_not_validated() {
        let mut value = complete_analysis();
        // Presence is the contract; a string where an array is expected still parses.
        value["technical_skills"] = json!("Python only");
        assert!(validate_shape(value.as_object().unwrap()).is_ok());
        let result: TailoringResult = serde_json::from_value(value).unwrap();
        assert_eq!(result.technical_skills, json!("Python only"));
    }
}
