use std::path::{Path, PathBuf};

use crate::backend::PdfBackend;
use crate::collection::Collection;
use crate::extract::{Extraction, extract_document};
use crate::model::{
    CollectionReport, ExtractedSection, InputDescriptor, Metadata, SubsectionAnalysis,
};
use crate::summarize::{SummaryConfig, section_title, summarize_with};
use crate::{DigestError, ProgressEvent, SkipReason};

/// Page number reported for every entry; text is not attributed to pages.
pub const PAGE_NUMBER: u32 = 1;

/// Local time in ISO-8601 with microseconds, e.g. `2025-07-10T14:03:22.512907`.
pub fn processing_timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

/// Read and parse an input descriptor.
pub fn load_descriptor(path: &Path) -> Result<InputDescriptor, DigestError> {
    let content = std::fs::read_to_string(path).map_err(|source| DigestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| DigestError::Descriptor {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `report` as 2-space indented UTF-8 JSON, replacing any existing file.
pub fn write_report(report: &CollectionReport, path: &Path) -> Result<(), DigestError> {
    let json = serde_json::to_string_pretty(report).map_err(DigestError::Serialize)?;
    std::fs::write(path, json).map_err(|source| DigestError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Builds the output report for one collection.
pub struct ReportBuilder<'a> {
    backend: &'a dyn PdfBackend,
    summary: &'a SummaryConfig,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(backend: &'a dyn PdfBackend, summary: &'a SummaryConfig) -> Self {
        Self { backend, summary }
    }

    /// Load the collection's descriptor, summarize every listed document and
    /// write `challenge1b_output.json`. Returns the output path.
    ///
    /// A missing or malformed descriptor is an error. Documents that fail to
    /// extract or extract to whitespace are skipped.
    pub fn build(
        &self,
        collection: &Collection,
        progress: &dyn Fn(ProgressEvent),
    ) -> Result<PathBuf, DigestError> {
        let descriptor = load_descriptor(&collection.input_path())?;
        let timestamp = processing_timestamp();

        let report = self.assemble(&descriptor, collection, timestamp, progress);

        let output_path = collection.output_path();
        write_report(&report, &output_path)?;
        tracing::info!(
            path = %output_path.display(),
            sections = report.extracted_sections.len(),
            "wrote report"
        );
        progress(ProgressEvent::ReportWritten {
            path: output_path.clone(),
            sections: report.extracted_sections.len(),
        });

        Ok(output_path)
    }

    /// Assemble the report in memory without touching the output file.
    pub fn assemble(
        &self,
        descriptor: &InputDescriptor,
        collection: &Collection,
        timestamp: String,
        progress: &dyn Fn(ProgressEvent),
    ) -> CollectionReport {
        let mut report = CollectionReport {
            metadata: Metadata {
                input_documents: descriptor.filenames(),
                persona: descriptor.persona.role.clone(),
                job_to_be_done: descriptor.job_to_be_done.task.clone(),
                processing_timestamp: timestamp,
            },
            extracted_sections: Vec::new(),
            subsection_analysis: Vec::new(),
        };

        let total = descriptor.documents.len();
        for (idx, doc) in descriptor.documents.iter().enumerate() {
            let rank = idx + 1;
            let filename = &doc.filename;
            progress(ProgressEvent::DocumentStarted {
                filename: filename.clone(),
                rank,
                total,
            });

            let text = match extract_document(self.backend, &collection.document_path(filename)) {
                Extraction::Text(text) => text,
                Extraction::Empty => {
                    progress(ProgressEvent::DocumentSkipped {
                        filename: filename.clone(),
                        reason: SkipReason::Empty,
                    });
                    continue;
                }
                Extraction::Failed(e) => {
                    progress(ProgressEvent::DocumentSkipped {
                        filename: filename.clone(),
                        reason: SkipReason::ExtractionFailed(e.to_string()),
                    });
                    continue;
                }
            };

            let summary = summarize_with(&text, self.summary);

            report.extracted_sections.push(ExtractedSection {
                document: filename.clone(),
                section_title: section_title(&summary, self.summary.title_max_chars),
                importance_rank: rank,
                page_number: PAGE_NUMBER,
            });
            report.subsection_analysis.push(SubsectionAnalysis {
                document: filename.clone(),
                refined_text: summary,
                page_number: PAGE_NUMBER,
            });
        }

        report
    }
}
