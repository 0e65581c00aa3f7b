//! Request-level analysis backends.
//!
//! `AppState` holds one `Arc<dyn ResumeAnalyzer>`, chosen at startup: the LLM
//! when an API key is configured, otherwise the local heuristic pipeline over
//! whichever `SkillAnalyzer` loaded.

use std::sync::Arc;

use async_trait::async_trait;

use crate::analysis::analyze;
use crate::analysis::extractor::SkillAnalyzer;
use crate::analysis::llm::LlmAnalyzer;
use crate::errors::AppError;
use crate::models::analysis::AnalysisResult;

#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    /// "llm" | "nlp" | "keyword" — surfaced by the health endpoint.
    fn backend(&self) -> &'static str;

    async fn analyze(
        &self,
        resume_text: String,
        job_requirements: String,
    ) -> Result<AnalysisResult, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Heuristic pipeline
// ────────────────────────────────────────────────────────────────────────────

pub struct HeuristicAnalyzer(pub Arc<dyn SkillAnalyzer>);

#[async_trait]
impl ResumeAnalyzer for HeuristicAnalyzer {
    fn backend(&self) -> &'static str {
        self.0.backend()
    }

    async fn analyze(
        &self,
        resume_text: String,
        job_requirements: String,
    ) -> Result<AnalysisResult, AppError> {
        // A panic inside extraction surfaces as a processing failure, not a dropped connection
        let skills = Arc::clone(&self.0);
        tokio::task::spawn_blocking(move || analyze(skills.as_ref(), &resume_text, &job_requirements))
            .await
            .map_err(|e| AppError::from_join(e, "Resume analysis failed"))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LLM
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl ResumeAnalyzer for LlmAnalyzer {
    fn backend(&self) -> &'static str {
        "llm"
    }

    async fn analyze(
        &self,
        resume_text: String,
        job_requirements: String,
    ) -> Result<AnalysisResult, AppError> {
        LlmAnalyzer::analyze(self, &resume_text, &job_requirements)
            .await
            .map_err(AppError::from)
    }
}
