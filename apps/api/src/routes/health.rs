use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Reports which analyzer backend is active.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "nlp_loaded": state.analyzer.backend() == "nlp",
        "llm_enabled": state.analyzer.backend() == "llm",
        "pdf_support": true,
        "extractor": state.analyzer.backend(),
        "message": "Resume Analyzer API is running"
    }))
}

/// GET /api/info
pub async fn info_handler() -> Json<Value> {
    Json(json!({
        "name": "Resume Analyzer",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Skill-gap analysis of resumes against job requirements",
        "endpoints": {
            "/health": "GET - Health check",
            "/analyze": "POST - Analyze resume (LLM when configured, else local extraction)",
            "/upload": "POST - Extract text from a TXT or PDF resume",
            "/": "GET - Web interface",
            "/api/info": "GET - API information"
        }
    }))
}
