mod analysis;
mod config;
mod errors;
mod llm_client;
mod models;
mod nlp;
mod routes;
mod state;
mod upload;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::analysis::backend::{HeuristicAnalyzer, ResumeAnalyzer};
use crate::analysis::extractor::{KeywordAnalyzer, NlpAnalyzer, SkillAnalyzer};
use crate::analysis::llm::LlmAnalyzer;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::nlp::NlpModel;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analyzer v{}", env!("CARGO_PKG_VERSION"));

    // Pick the analyzer once; it is shared read-only by every request
    let analyzer = select_analyzer(&config)?;
    info!("Resume analyzer initialized (backend: {})", analyzer.backend());

    let state = AppState {
        config: config.clone(),
        analyzer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Uses the LLM when an API key is configured, otherwise the local pipeline.
fn select_analyzer(config: &Config) -> Result<Arc<dyn ResumeAnalyzer>> {
    if let Some(llm) = &config.llm {
        info!("LLM analysis enabled (model: {}, endpoint: {})", llm.model, llm.api_url);
        return Ok(Arc::new(LlmAnalyzer(LlmClient::new(llm)?)));
    }
    Ok(Arc::new(HeuristicAnalyzer(select_skill_analyzer(config))))
}

/// Loads the NLP model if enabled, falling back to keyword matching when it is
/// disabled or cannot be loaded.
fn select_skill_analyzer(config: &Config) -> Arc<dyn SkillAnalyzer> {
    if config.nlp_disabled {
        info!("NLP disabled by configuration, using keyword analyzer");
        return Arc::new(KeywordAnalyzer);
    }

    match NlpModel::load(&config.nlp_model_path) {
        Ok(model) => {
            info!(
                "NLP model loaded from {} ({} entities)",
                config.nlp_model_path.display(),
                model.entity_count()
            );
            Arc::new(NlpAnalyzer::new(Arc::new(model)))
        }
        Err(e) => {
            warn!("{e}; falling back to keyword analyzer");
            Arc::new(KeywordAnalyzer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    use crate::config::LlmConfig;

    fn config(nlp_model_path: PathBuf, nlp_disabled: bool) -> Config {
        Config {
            port: 0,
            rust_log: "info".to_string(),
            static_dir: PathBuf::from("static"),
            nlp_model_path,
            nlp_disabled,
            max_upload_bytes: 1024,
            llm: None,
        }
    }

    fn backend_of(config: &Config) -> &'static str {
        select_analyzer(config).unwrap().backend()
    }

    #[test]
    fn test_missing_model_falls_back_to_keyword() {
        let config = config(PathBuf::from("/nonexistent/entities.json"), false);
        assert_eq!(backend_of(&config), "keyword");
    }

    #[test]
    fn test_loaded_model_selects_nlp() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"organization": ["google"]}}"#).unwrap();
        assert_eq!(backend_of(&config(file.path().to_path_buf(), false)), "nlp");
    }

    #[test]
    fn test_disabled_flag_wins_over_valid_model() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"organization": ["google"]}}"#).unwrap();
        assert_eq!(backend_of(&config(file.path().to_path_buf(), true)), "keyword");
    }

    #[test]
    fn test_llm_key_takes_precedence() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"organization": ["google"]}}"#).unwrap();
        let mut config = config(file.path().to_path_buf(), false);
        config.llm = Some(LlmConfig {
            api_key: "key".to_string(),
            api_url: "http://127.0.0.1:9/v1/chat/completions".to_string(),
            model: "test-model".to_string(),
        });
        assert_eq!(backend_of(&config), "llm");
    }
}
