use std::path::PathBuf;

use thiserror::Error;

pub mod backend;
pub mod collection;
pub mod config_file;
pub mod driver;
pub mod extract;
pub mod model;
pub mod report;
pub mod summarize;

// Re-export for convenience
pub use backend::{BackendError, PdfBackend};
pub use collection::{Collection, DiscoveryOrder, discover_collections};
pub use driver::{Driver, RunSummary};
pub use extract::{Extraction, extract_document};
pub use model::{
    CollectionReport, DocumentRef, ExtractedSection, InputDescriptor, JobToBeDone, Metadata,
    Persona, SubsectionAnalysis,
};
pub use report::ReportBuilder;
pub use summarize::{SummaryConfig, section_title, summarize, summarize_with};

/// Errors that abort a run. Per-document extraction problems never surface
/// here; they are reported as [`ProgressEvent::DocumentSkipped`].
#[derive(Error, Debug)]
pub enum DigestError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed input descriptor {}: {source}", path.display())]
    Descriptor {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize report: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Runtime configuration for a [`Driver`].
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub summary: SummaryConfig,
    pub order: DiscoveryOrder,
}

/// Why a document contributed no entries to its report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Extraction succeeded but the text was blank.
    Empty,
    /// The PDF could not be opened or read.
    ExtractionFailed(String),
}

/// Progress events emitted while processing collections.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    CollectionsDiscovered {
        count: usize,
    },
    CollectionStarted {
        name: String,
        index: usize,
        total: usize,
    },
    DocumentStarted {
        filename: String,
        /// 1-based position in the descriptor.
        rank: usize,
        total: usize,
    },
    DocumentSkipped {
        filename: String,
        reason: SkipReason,
    },
    ReportWritten {
        path: PathBuf,
        sections: usize,
    },
}
