use crate::error::EvregError;
use crate::extraction::{join_pages, PdfExtractor};
use crate::model::{IngestOutcome, ParsedReport};
use crate::parsing::parse_report;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Runs the extraction pipeline over a list of report files and accumulates
/// the county and ZIP record collections.
pub struct ReportIngestor<'a> {
    extractor: &'a dyn PdfExtractor,
    cancel: Arc<AtomicBool>,
}

impl<'a> ReportIngestor<'a> {
    pub fn new(extractor: &'a dyn PdfExtractor) -> Self {
        Self {
            extractor,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag that, once set, stops the run before the next file.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Ingest files in the order given.
    ///
    /// A file whose text cannot be extracted aborts the run with an error
    /// naming that file. Missing dates and sections never abort.
    pub fn ingest(&self, files: &[PathBuf]) -> Result<IngestOutcome, EvregError> {
        let mut outcome = IngestOutcome::default();

        for path in files {
            let name = source_name(path);
            if self.cancel.load(Ordering::Relaxed) {
                return Err(EvregError::Cancelled { next_file: name });
            }

            let report = self.ingest_file(path, &name)?;
            tracing::info!(
                file = %name,
                date = ?report.date,
                county = report.county.len(),
                zip = report.zip.len(),
                "report ingested"
            );
            outcome.append(report);
        }

        Ok(outcome)
    }

    /// Extract and parse a single file without touching any accumulator.
    pub fn ingest_file(&self, path: &Path, name: &str) -> Result<ParsedReport, EvregError> {
        let bytes = std::fs::read(path).map_err(|e| EvregError::from(e).for_file(name))?;
        let pages = self
            .extractor
            .extract_pages(&bytes)
            .map_err(|e| e.for_file(name))?;
        tracing::debug!(
            file = name,
            pages = pages.len(),
            backend = self.extractor.backend_name(),
            "text extracted"
        );
        Ok(parse_report(&join_pages(&pages), name))
    }
}

/// The identifying name recorded on every record: the file name without
/// its directory.
pub fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
