use std::path::Path;

use mupdf::{Document, TextPageFlags};

use persona_digest_core::{BackendError, PdfBackend};

/// Keep ligatures and whitespace as written, drop text outside the mediabox.
pub const TEXT_FLAGS: TextPageFlags = TextPageFlags::PRESERVE_LIGATURES
    .union(TextPageFlags::PRESERVE_WHITESPACE)
    .union(TextPageFlags::CLIP);

/// MuPDF-based implementation of [`PdfBackend`].
///
/// This crate is the sole AGPL island. It isolates the mupdf dependency
/// (AGPL-3.0) so that the summarizing pipeline does not transitively
/// depend on it.
///
/// Every page is read in order and every text line is terminated with
/// `\n`. Pages are concatenated with no extra separator.
///
/// Text pages are built with [`TEXT_FLAGS`], the same options PyMuPDF's
/// `get_text()` uses by default.
#[derive(Debug, Default, Clone, Copy)]
pub struct MupdfBackend;

impl MupdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for MupdfBackend {
    fn extract_text(&self, path: &Path) -> Result<String, BackendError> {
        let path_str = path
            .to_str()
            .ok_or_else(|| BackendError::OpenError("invalid path encoding".into()))?;

        let document =
            Document::open(path_str).map_err(|e| BackendError::OpenError(e.to_string()))?;

        let mut text = String::new();

        for page_result in document
            .pages()
            .map_err(|e| BackendError::ExtractionError(e.to_string()))?
        {
            let page = page_result.map_err(|e| BackendError::ExtractionError(e.to_string()))?;
            let text_page = page
                .to_text_page(TEXT_FLAGS)
                .map_err(|e| BackendError::ExtractionError(e.to_string()))?;

            // One line of output per text line, in block order
            for block in text_page.blocks() {
                for line in block.lines() {
                    text.extend(line.chars().map(|c| c.char().unwrap_or('\u{FFFD}')));
                    text.push('\n');
                }
            }
        }

        Ok(text)
    }
}
