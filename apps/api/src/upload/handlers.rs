//! Axum route handler for resume file uploads.

use axum::{extract::Multipart, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::upload::decode_upload;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub text: String,
    pub status: String,
}

/// POST /upload
///
/// Accepts a multipart form with a `file` field (.txt or .pdf) and returns its text.
pub async fn handle_upload(mut multipart: Multipart) -> Result<Json<UploadResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        // A part without a filename attribute is a plain form value, not a file
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        if filename.is_empty() {
            return Err(AppError::Validation("No file selected".to_string()));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        info!("Decoding upload {filename} ({} bytes)", bytes.len());

        // PDF parsing is CPU-bound and may panic on hostile input
        let name = filename.clone();
        let text = tokio::task::spawn_blocking(move || decode_upload(&name, &bytes))
            .await
            .map_err(|e| AppError::from_join(e, &format!("Error reading {filename}")))??;

        return Ok(Json(UploadResponse {
            text,
            status: "success".to_string(),
        }));
    }

    Err(AppError::Validation("No file provided".to_string()))
}
