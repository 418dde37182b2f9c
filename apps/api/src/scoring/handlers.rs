use axum::extract::{Multipart, State};
use axum::Json;

use crate::errors::AppError;
use crate::extract::{extract_text, FileKind};
use crate::scoring::aggregate::ScoreBreakdown;
use crate::state::AppState;

/// POST /api/v1/score
///
/// Accepts `multipart/form-data` with either a `lor_text` text field or an
/// uploaded `file` (PDF or DOCX). A provided file wins over a provided text
/// field. Neither present → 400.
pub async fn handle_score(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScoreBreakdown>, AppError> {
    let mut lor_text: Option<String> = None;
    let mut upload: Option<(String, bytes::Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "lor_text" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable lor_text field: {e}")))?;
                lor_text = Some(text);
            }
            "file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable file field: {e}")))?;
                upload = Some((filename, data));
            }
            _ => {}
        }
    }

    let text = match upload {
        Some((filename, data)) => {
            let kind = FileKind::from_filename(&filename)
                .ok_or_else(|| AppError::UnsupportedFileType(filename.clone()))?;
            tracing::info!(%filename, ?kind, bytes = data.len(), "extracting uploaded letter");
            // Extraction parses whole documents; keep it off the async runtime.
            tokio::task::spawn_blocking(move || extract_text(kind, &data))
                .await
                .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))??
        }
        None => match lor_text {
            Some(text) if !text.is_empty() => text,
            _ => return Err(AppError::Validation("No input provided.".to_string())),
        },
    };

    Ok(Json(state.scorer.score(&text)))
}
