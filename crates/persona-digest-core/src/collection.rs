use std::path::{Path, PathBuf};

use crate::DigestError;

/// Subfolder holding a collection's PDFs.
pub const PDF_DIR: &str = "PDFs";
/// Input descriptor file name.
pub const INPUT_FILE: &str = "challenge1b_input.json";
/// Output report file name.
pub const OUTPUT_FILE: &str = "challenge1b_output.json";

/// Order in which discovered collections are processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscoveryOrder {
    /// Whatever order the filesystem listing yields. Not stable across platforms.
    #[default]
    Listing,
    /// Sorted by folder name.
    Sorted,
}

/// A folder with a `PDFs` subfolder and an input descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub name: String,
    pub path: PathBuf,
}

impl Collection {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Self { name, path }
    }

    pub fn pdf_dir(&self) -> PathBuf {
        self.path.join(PDF_DIR)
    }

    pub fn input_path(&self) -> PathBuf {
        self.path.join(INPUT_FILE)
    }

    pub fn output_path(&self) -> PathBuf {
        self.path.join(OUTPUT_FILE)
    }

    /// Path of a descriptor-listed document, taken verbatim.
    pub fn document_path(&self, filename: &str) -> PathBuf {
        self.pdf_dir().join(filename)
    }
}

/// Whether `dir` directly contains a `PDFs` folder and an input descriptor.
pub fn is_collection(dir: &Path) -> bool {
    dir.is_dir() && dir.join(PDF_DIR).is_dir() && dir.join(INPUT_FILE).is_file()
}

/// List the immediate subdirectories of `root` that qualify as collections.
pub fn discover_collections(
    root: &Path,
    order: DiscoveryOrder,
) -> Result<Vec<Collection>, DigestError> {
    let entries = std::fs::read_dir(root).map_err(|source| DigestError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    let mut collections = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| DigestError::Io {
            path: root.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if is_collection(&path) {
            collections.push(Collection::new(path));
        } else {
            tracing::trace!(path = %path.display(), "not a collection");
        }
    }

    if order == DiscoveryOrder::Sorted {
        collections.sort_by(|a, b| a.name.cmp(&b.name));
    }

    tracing::debug!(root = %root.display(), count = collections.len(), "discovered collections");
    Ok(collections)
}
