//! PDF text extraction for uploaded resumes.
//!
//! Extraction is delegated entirely to `pdf-extract` and runs under
//! `spawn_blocking` so the CPU-bound work never stalls the async executor.

use axum::{
    extract::Multipart,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde_json::json;
use tracing::{error, info, warn};

use crate::errors::AppError;

/// POST /api/resume/parse-pdf
///
/// Multipart form with a `file` field. Returns `{text, pages, success}`;
/// extraction that yields no text is a 200 with an explicit warning, while an
/// unreadable file is a 500 whose body still carries an empty `text` so the
/// caller's parsing code stays uniform.
pub async fn handle_parse_pdf(mut multipart: Multipart) -> Result<Response, AppError> {
    let mut file_bytes: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart form: {e}")))?
    {
        if field.name() == Some("file") {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read uploaded file: {e}")))?;
            file_bytes = Some(data);
            break;
        }
    }

    let data = file_bytes.ok_or_else(|| AppError::Validation("File is required".to_string()))?;
    info!("Parsing uploaded PDF ({} bytes)", data.len());

    let extracted = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF extraction task panicked: {e}")))?;

    match extracted {
        Ok(raw) => {
            let pages = page_count(&raw);
            let text = raw.trim();
            if text.is_empty() {
                warn!("PDF extraction yielded no text");
                Ok(Json(json!({
                    "text": "",
                    "pages": pages,
                    "success": false,
                    "warning": "No text could be extracted from this PDF"
                }))
                .into_response())
            } else {
                info!("Extracted {} characters across {} page(s)", text.len(), pages);
                Ok(Json(json!({
                    "text": text,
                    "pages": pages,
                    "success": true
                }))
                .into_response())
            }
        }
        Err(e) => {
            error!("PDF extraction failed: {e}");
            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to parse PDF file",
                    "text": ""
                })),
            )
                .into_response())
        }
    }
}

/// Page count from extracted text. `pdf-extract` separates pages with form
/// feeds; text without any is a single page, and empty text is zero pages.
fn page_count(raw: &str) -> usize {
    if raw.trim().is_empty() {
        0
    } else {
        raw.matches('\u{c}').count() + 1
    }
}
