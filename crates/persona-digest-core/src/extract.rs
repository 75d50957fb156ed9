use std::path::Path;

use crate::backend::{BackendError, PdfBackend};

/// Outcome of extracting text from a single document.
#[derive(Debug)]
pub enum Extraction {
    /// Text with at least one non-whitespace character.
    Text(String),
    /// The backend succeeded but produced only whitespace.
    Empty,
    /// The backend could not open or read the file.
    Failed(BackendError),
}

/// Run `backend` over `path` and classify the result.
///
/// Never fails: backend errors are logged and returned as
/// [`Extraction::Failed`] so the caller decides whether to skip.
pub fn extract_document(backend: &dyn PdfBackend, path: &Path) -> Extraction {
    match backend.extract_text(path) {
        Ok(text) if text.trim().is_empty() => {
            tracing::debug!(path = %path.display(), "extraction produced no text");
            Extraction::Empty
        }
        Ok(text) => {
            tracing::debug!(path = %path.display(), chars = text.chars().count(), "extracted text");
            Extraction::Text(text)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read PDF");
            Extraction::Failed(e)
        }
    }
}
