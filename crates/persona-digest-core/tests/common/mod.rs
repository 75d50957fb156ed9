//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use persona_digest_core::collection::{INPUT_FILE, PDF_DIR};
use persona_digest_core::{BackendError, PdfBackend};

/// A configurable mock response for [`MockBackend`].
#[derive(Clone, Debug)]
pub enum MockResponse {
    Text(String),
    Error(String),
}

/// A hand-rolled mock implementing [`PdfBackend`], keyed by file name.
///
/// Files without a configured response fail to open, like a missing PDF.
/// Every requested path is recorded in call order.
#[derive(Default)]
pub struct MockBackend {
    responses: HashMap<String, MockResponse>,
    calls: Mutex<Vec<PathBuf>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, filename: &str, text: &str) -> Self {
        self.responses
            .insert(filename.to_string(), MockResponse::Text(text.to_string()));
        self
    }

    pub fn with_error(mut self, filename: &str, message: &str) -> Self {
        self.responses.insert(
            filename.to_string(),
            MockResponse::Error(message.to_string()),
        );
        self
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

impl PdfBackend for MockBackend {
    fn extract_text(&self, path: &Path) -> Result<String, BackendError> {
        self.calls.lock().unwrap().push(path.to_path_buf());
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        match self.responses.get(&name) {
            Some(MockResponse::Text(text)) => Ok(text.clone()),
            Some(MockResponse::Error(message)) => {
                Err(BackendError::ExtractionError(message.clone()))
            }
            None => Err(BackendError::OpenError(format!("no such file: {name}"))),
        }
    }
}

/// Build a descriptor JSON document listing `filenames`.
pub fn descriptor_json(filenames: &[&str]) -> String {
    let documents: Vec<_> = filenames
        .iter()
        .map(|f| serde_json::json!({ "filename": f, "title": f.trim_end_matches(".pdf") }))
        .collect();
    serde_json::json!({
        "challenge_info": { "challenge_id": "round_1b_test", "test_case_name": "test" },
        "documents": documents,
        "persona": { "role": "Travel Planner" },
        "job_to_be_done": { "task": "Plan a trip of 4 days for a group of 10 college friends." }
    })
    .to_string()
}

/// Create `root/name` as a collection with the given descriptor contents.
pub fn make_collection(root: &Path, name: &str, descriptor: &str) -> PathBuf {
    let dir = root.join(name);
    std::fs::create_dir_all(dir.join(PDF_DIR)).unwrap();
    std::fs::write(dir.join(INPUT_FILE), descriptor).unwrap();
    dir
}
