//! Chat-completions client used by the LLM analyzer.
//!
//! Speaks the OpenAI-compatible `/v1/chat/completions` shape with bearer auth.
//! No retries: a 429 or 402 is reported straight back to the caller.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

use crate::config::LlmConfig;

const TEMPERATURE: f32 = 0.3;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
/// How much of an unparseable reply is echoed back in the error.
const RESPONSE_PREVIEW_CHARS: usize = 200;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("AI service requires additional credits.")]
    PaymentRequired,

    #[error("AI Gateway error: {0}")]
    Api(u16),

    #[error("Invalid response format from AI service")]
    InvalidFormat,

    #[error("Empty response from AI service")]
    EmptyContent,

    #[error("Failed to extract JSON from AI response. Response: {0}")]
    NoJson(String),

    #[error("Failed to parse AI response as JSON")]
    Parse(#[source] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl LlmClient {
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends one system + user exchange and returns the assistant's text.
    pub async fn chat(&self, system: &str, user: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("AI gateway returned {status}: {body}");
            return Err(status_error(status.as_u16()));
        }

        let chat: ChatResponse = response.json().await?;
        let message = chat
            .choices
            .into_iter()
            .flatten()
            .next()
            .and_then(|c| c.message)
            .ok_or(LlmError::InvalidFormat)?;

        let content = message.content.unwrap_or_default();
        if content.is_empty() {
            return Err(LlmError::EmptyContent);
        }

        debug!("AI gateway replied with {} chars", content.len());
        Ok(content)
    }
}

fn status_error(status: u16) -> LlmError {
    match status {
        429 => LlmError::RateLimited,
        402 => LlmError::PaymentRequired,
        other => LlmError::Api(other),
    }
}

/// Pulls the JSON object out of free-form model output.
///
/// Takes everything from the first `{` through the last `}`, so prose or code
/// fences around the object are ignored. Without braces the whole reply must
/// itself be JSON.
pub fn extract_json(content: &str) -> Result<Value, LlmError> {
    let object = match (content.find('{'), content.rfind('}')) {
        (Some(start), Some(end)) if start < end => Some(&content[start..=end]),
        _ => None,
    };

    match object {
        Some(raw) => serde_json::from_str(raw).map_err(LlmError::Parse),
        None => serde_json::from_str(content).map_err(|_| {
            LlmError::NoJson(content.chars().take(RESPONSE_PREVIEW_CHARS).collect())
        }),
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{completion, spawn_gateway};
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_json_ignores_surrounding_prose() {
        let content = "Here is the analysis:\n```json\n{\"matchPercentage\": 80}\n```\nHope it helps!";
        assert_eq!(extract_json(content).unwrap(), json!({"matchPercentage": 80}));
    }

    #[test]
    fn test_extract_json_spans_first_to_last_brace() {
        let content = r#"{"a": {"b": 1}} trailing"#;
        assert_eq!(extract_json(content).unwrap(), json!({"a": {"b": 1}}));
    }

    #[test]
    fn test_extract_json_without_braces_parses_whole_reply() {
        assert_eq!(extract_json(" [1, 2] ").unwrap(), json!([1, 2]));
    }

    #[test]
    fn test_extract_json_reports_preview_when_nothing_found() {
        let content = "x".repeat(500);
        match extract_json(&content).unwrap_err() {
            LlmError::NoJson(preview) => assert_eq!(preview.len(), RESPONSE_PREVIEW_CHARS),
            other => panic!("expected NoJson, got {other:?}"),
        }
    }

    #[test]
    fn test_extract_json_malformed_object_is_parse_error() {
        let err = extract_json("{ not: json }").unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)));
        assert_eq!(err.to_string(), "Failed to parse AI response as JSON");
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(status_error(429), LlmError::RateLimited));
        assert!(matches!(status_error(402), LlmError::PaymentRequired));
        let err = status_error(502);
        assert_eq!(err.to_string(), "AI Gateway error: 502");
    }

    #[tokio::test]
    async fn test_chat_sends_system_and_user_messages() {
        let (config, seen) = spawn_gateway(200, completion("{}")).await;
        let client = LlmClient::new(&config).unwrap();

        let reply = client.chat("be terse", "Resume Text:\nhi").await.unwrap();
        assert_eq!(reply, "{}");

        let seen = seen.lock().unwrap();
        let (auth, body) = &seen[0];
        assert_eq!(auth.as_deref(), Some("Bearer test-key"));
        assert_eq!(body["model"], "test-model");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "be terse");
        assert_eq!(body["messages"][1]["role"], "user");
        assert!((body["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_chat_maps_rate_limit_and_credits() {
        let (config, _) = spawn_gateway(429, json!({})).await;
        let err = LlmClient::new(&config).unwrap().chat("s", "u").await.unwrap_err();
        assert!(matches!(err, LlmError::RateLimited));

        let (config, _) = spawn_gateway(402, json!({})).await;
        let err = LlmClient::new(&config).unwrap().chat("s", "u").await.unwrap_err();
        assert_eq!(err.to_string(), "AI service requires additional credits.");
    }

    #[tokio::test]
    async fn test_chat_rejects_missing_or_empty_message() {
        let (config, _) = spawn_gateway(200, json!({"choices": []})).await;
        let err = LlmClient::new(&config).unwrap().chat("s", "u").await.unwrap_err();
        assert!(matches!(err, LlmError::InvalidFormat));

        let (config, _) = spawn_gateway(200, completion("")).await;
        let err = LlmClient::new(&config).unwrap().chat("s", "u").await.unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
    }
}
