use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tokio::task::JoinError;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed input. The caller's fault.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Input the service cannot handle, with a workaround for the user.
    #[error("Unsupported input: {message}")]
    Unsupported { message: String, suggestion: String },

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Payment required: {0}")]
    PaymentRequired(String),

    /// Analysis or decoding failed on well-formed input. Message is surfaced.
    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Maps a failed blocking task: a panic is a processing failure with its
    /// message, anything else (cancellation at shutdown) is internal.
    pub fn from_join(err: JoinError, context: &str) -> Self {
        if err.is_panic() {
            AppError::Processing(format!("{context}: {err}"))
        } else {
            AppError::Internal(anyhow::Error::new(err).context(context.to_string()))
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected JSON body: {rejection}");
        AppError::Validation("No data provided".to_string())
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::RateLimited => AppError::RateLimited(err.to_string()),
            LlmError::PaymentRequired => AppError::PaymentRequired(err.to_string()),
            other => AppError::Processing(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut suggestion = None;
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Unsupported {
                message,
                suggestion: hint,
            } => {
                suggestion = Some(hint.clone());
                (StatusCode::BAD_REQUEST, "UNSUPPORTED_INPUT", message.clone())
            }
            AppError::RateLimited(msg) => {
                tracing::warn!("Upstream rate limit: {msg}");
                (StatusCode::TOO_MANY_REQUESTS, "RATE_LIMITED", msg.clone())
            }
            AppError::PaymentRequired(msg) => {
                tracing::warn!("Upstream payment required: {msg}");
                (StatusCode::PAYMENT_REQUIRED, "PAYMENT_REQUIRED", msg.clone())
            }
            AppError::Processing(msg) => {
                tracing::error!("Processing error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PROCESSING_ERROR",
                    msg.clone(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let Some(suggestion) = suggestion {
            error["suggestion"] = json!(suggestion);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
