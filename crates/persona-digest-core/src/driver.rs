use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::backend::PdfBackend;
use crate::collection::discover_collections;
use crate::report::ReportBuilder;
use crate::{Config, DigestError, ProgressEvent};

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Number of collections discovered (and processed).
    pub collections: usize,
    /// Written report paths, in processing order.
    pub reports: Vec<PathBuf>,
    pub elapsed: Duration,
}

/// Processes every collection under a root directory, one at a time.
pub struct Driver {
    root: PathBuf,
    backend: Box<dyn PdfBackend>,
    config: Config,
}

impl Driver {
    pub fn new(root: impl Into<PathBuf>, backend: Box<dyn PdfBackend>, config: Config) -> Self {
        Self {
            root: root.into(),
            backend,
            config,
        }
    }

    /// Discover collections and build a report for each.
    ///
    /// The first collection that fails (unreadable or malformed descriptor,
    /// unwritable output) aborts the run; later collections are not touched.
    pub fn run(&self, progress: impl Fn(ProgressEvent)) -> Result<RunSummary, DigestError> {
        let start = Instant::now();

        let collections = discover_collections(&self.root, self.config.order)?;
        let total = collections.len();
        progress(ProgressEvent::CollectionsDiscovered { count: total });

        let builder = ReportBuilder::new(self.backend.as_ref(), &self.config.summary);
        let mut reports = Vec::with_capacity(total);
        for (index, collection) in collections.iter().enumerate() {
            progress(ProgressEvent::CollectionStarted {
                name: collection.name.clone(),
                index,
                total,
            });
            let path = builder.build(collection, &progress)?;
            reports.push(path);
        }

        Ok(RunSummary {
            collections: total,
            reports,
            elapsed: start.elapsed(),
        })
    }
}
