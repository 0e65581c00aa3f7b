//! Upload decoding — turns an uploaded resume file into plain text.

pub mod handlers;

use crate::errors::AppError;

/// Kind of uploaded document, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Text,
    Pdf,
    Word,
    Unsupported,
}

impl UploadKind {
    pub fn from_filename(filename: &str) -> Self {
        let lower = filename.to_lowercase();
        if lower.ends_with(".txt") {
            UploadKind::Text
        } else if lower.ends_with(".pdf") {
            UploadKind::Pdf
        } else if lower.ends_with(".doc") || lower.ends_with(".docx") {
            UploadKind::Word
        } else {
            UploadKind::Unsupported
        }
    }
}

/// Extracts resume text from an uploaded file. Every failure here is the
/// caller's: the file itself is unusable.
pub fn decode_upload(filename: &str, bytes: &[u8]) -> Result<String, AppError> {
    match UploadKind::from_filename(filename) {
        UploadKind::Text => String::from_utf8(bytes.to_vec())
            .map_err(|_| AppError::Validation("Text file is not valid UTF-8".to_string())),
        UploadKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| AppError::Validation(format!("Error reading PDF: {e}"))),
        UploadKind::Word => Err(AppError::Unsupported {
            message: "Word documents require additional libraries. Please convert to TXT or copy text and paste."
                .to_string(),
            suggestion: "Open the document, copy all text, and paste it in the text area.".to_string(),
        }),
        UploadKind::Unsupported => Err(AppError::Validation(
            "Unsupported file type. Please use TXT or PDF.".to_string(),
        )),
    }
}
