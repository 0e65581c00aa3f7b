use std::sync::Arc;

use crate::analysis::backend::ResumeAnalyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable analyzer: the LLM when configured, else the heuristic
    /// pipeline over `NlpAnalyzer` or `KeywordAnalyzer`.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
}
