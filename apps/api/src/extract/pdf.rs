use super::ExtractError;

/// Whole-document text via `pdf-extract`. Pages that yield no text simply
/// contribute nothing; a document the parser cannot read is an error.
pub(super) fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
}
