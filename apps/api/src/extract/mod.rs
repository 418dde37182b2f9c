//! Document-text extraction for uploaded letters.
//!
//! Best effort: callers get whatever plain text the document yields, which
//! may be an empty string. Failures here are collaborator errors, reported
//! distinctly from "no input provided" at the request boundary.

mod docx;
mod pdf;

use thiserror::Error;

/// Accepted upload kinds, decided by filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
}

impl FileKind {
    /// Case-insensitive extension match. `None` means the upload is a kind
    /// the service does not accept.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            Some(FileKind::Pdf)
        } else if lower.ends_with(".docx") {
            Some(FileKind::Docx)
        } else {
            None
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to parse PDF: {0}")]
    Pdf(String),

    #[error("DOCX container is not a readable archive: {0}")]
    DocxArchive(#[from] zip::result::ZipError),

    #[error("DOCX document XML is malformed: {0}")]
    DocxXml(#[from] quick_xml::Error),

    #[error("failed to read DOCX entry: {0}")]
    DocxRead(#[from] std::io::Error),
}

/// Extracts plain text from raw file bytes. Blocking; async callers should
/// run this under `tokio::task::spawn_blocking`.
pub fn extract_text(kind: FileKind, bytes: &[u8]) -> Result<String, ExtractError> {
    match kind {
        FileKind::Pdf => pdf::extract(bytes),
        FileKind::Docx => docx::extract(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_from_pdf_extension() {
        assert_eq!(FileKind::from_filename("letter.pdf"), Some(FileKind::Pdf));
        assert_eq!(FileKind::from_filename("LETTER.PDF"), Some(FileKind::Pdf));
    }

    #[test]
    fn test_file_kind_from_docx_extension() {
        assert_eq!(FileKind::from_filename("letter.docx"), Some(FileKind::Docx));
        assert_eq!(FileKind::from_filename("Letter.DocX"), Some(FileKind::Docx));
    }

    #[test]
    fn test_file_kind_rejects_other_extensions() {
        assert_eq!(FileKind::from_filename("letter.txt"), None);
        assert_eq!(FileKind::from_filename("letter.doc"), None);
        assert_eq!(FileKind::from_filename("letter"), None);
        assert_eq!(FileKind::from_filename(""), None);
    }

    #[test]
    fn test_docx_garbage_bytes_is_an_error() {
        let result = extract_text(FileKind::Docx, b"not a zip archive");
        assert!(result.is_err());
    }
}
