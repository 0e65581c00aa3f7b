//! Axum route handler for the Analysis API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::analysis::AnalysisResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub resume_text: Option<String>,
    /// Comma-separated skills, e.g. "python, react, docker".
    pub job_requirements: Option<String>,
}

/// POST /analyze
///
/// Extracts skills and section summaries from the resume and scores them
/// against the required skills.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let Json(body) = payload?;
    let request = parse_request(body)?;

    let resume_text = match request.resume_text {
        Some(text) if !text.is_empty() => text,
        _ => return Err(AppError::Validation("Resume text is required".to_string())),
    };
    let job_requirements = request.job_requirements.unwrap_or_default();

    let result = state.analyzer.analyze(resume_text, job_requirements).await?;
    Ok(Json(result))
}

/// An empty object carries no data, same as a missing body.
fn parse_request(body: Value) -> Result<AnalyzeRequest, AppError> {
    match &body {
        Value::Object(fields) if !fields.is_empty() => {}
        _ => return Err(AppError::Validation("No data provided".to_string())),
    }
    serde_json::from_value(body)
        .map_err(|e| AppError::Validation(format!("Invalid request body: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(err: AppError) -> String {
        match err {
            AppError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_or_non_object_body_has_no_data() {
        for body in [json!({}), json!(null), json!([]), json!("resume")] {
            assert_eq!(message(parse_request(body).unwrap_err()), "No data provided");
        }
    }

    #[test]
    fn test_unrelated_fields_still_parse() {
        let request = parse_request(json!({"name": "Ada"})).unwrap();
        assert!(request.resume_text.is_none());
    }

    #[test]
    fn test_mistyped_field_is_validation_error() {
        let err = parse_request(json!({"resumeText": 42})).unwrap_err();
        assert!(message(err).starts_with("Invalid request body"));
    }
}
