use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_LLM_API_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
const DEFAULT_LLM_MODEL: &str = "google/gemini-2.5-flash";

/// Chat-completions endpoint used by the LLM analyzer.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
}

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory served at `/` (expects an `index.html`).
    pub static_dir: PathBuf,
    /// Entity lexicon for the NLP analyzer.
    pub nlp_model_path: PathBuf,
    /// Forces the keyword-only analyzer even if the model is present.
    pub nlp_disabled: bool,
    pub max_upload_bytes: usize,
    /// Set when `LLM_API_KEY` is present; the LLM analyzer then takes precedence.
    pub llm: Option<LlmConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5001".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            static_dir: env_or("STATIC_DIR", "static").into(),
            nlp_model_path: env_or("NLP_MODEL_PATH", "models/entities.json").into(),
            nlp_disabled: parse_bool(&env_or("NLP_DISABLED", "false"))
                .context("NLP_DISABLED must be true or false")?,
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
            llm: llm_from_parts(
                std::env::var("LLM_API_KEY").ok(),
                std::env::var("LLM_API_URL").ok(),
                std::env::var("LLM_MODEL").ok(),
            ),
        })
    }
}

fn llm_from_parts(
    api_key: Option<String>,
    api_url: Option<String>,
    model: Option<String>,
) -> Option<LlmConfig> {
    let api_key = api_key.filter(|k| !k.trim().is_empty())?;
    Some(LlmConfig {
        api_key,
        api_url: api_url
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LLM_API_URL.to_string()),
        model: model
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
    })
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("unrecognized boolean '{other}'"),
    }
}
