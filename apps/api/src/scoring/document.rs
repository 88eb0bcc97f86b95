//! Turns an uploaded CV document (PDF or plain text) into analyzable text.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("uploaded file is empty")]
    Empty,

    #[error("could not read PDF: {0}")]
    Pdf(String),

    #[error("uploaded text is not valid UTF-8")]
    NotUtf8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Text,
}

impl DocumentKind {
    /// PDF when the content type, file extension or magic bytes say so.
    pub fn detect(bytes: &[u8], content_type: Option<&str>, file_name: Option<&str>) -> Self {
        let by_type = content_type.is_some_and(|ct| ct.eq_ignore_ascii_case("application/pdf"));
        let by_name = file_name.is_some_and(|n| n.to_ascii_lowercase().ends_with(".pdf"));
        let by_magic = bytes.starts_with(b"%PDF");

        if by_type || by_name || by_magic {
            DocumentKind::Pdf
        } else {
            DocumentKind::Text
        }
    }
}

/// Blocking: PDF parsing is CPU-bound, callers on the runtime should use
/// `spawn_blocking`.
pub fn extract_cv_text(bytes: &[u8], kind: DocumentKind) -> Result<String, DocumentError> {
    if bytes.is_empty() {
        return Err(DocumentError::Empty);
    }

    match kind {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| DocumentError::Pdf(e.to_string())),
        DocumentKind::Text => String::from_utf8(bytes.to_vec()).map_err(|_| DocumentError::NotUtf8),
    }
}
