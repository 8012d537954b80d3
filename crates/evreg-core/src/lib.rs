pub mod analysis;
pub mod discovery;
pub mod error;
pub mod export;
pub mod extraction;
pub mod ingest;
pub mod model;
pub mod parsing;

use error::EvregError;
use extraction::PdfExtractor;
use ingest::ReportIngestor;
use model::{IngestOutcome, ParsedReport};
use std::path::{Path, PathBuf};

pub use parsing::parse_report;

/// Main API entry point: ingest report files, in the given order, into the
/// county and ZIP record collections.
///
/// Fails on the first file whose text cannot be extracted, naming that file.
pub fn ingest_reports(
    files: &[PathBuf],
    extractor: &dyn PdfExtractor,
) -> Result<IngestOutcome, EvregError> {
    ReportIngestor::new(extractor).ingest(files)
}

/// Discover every matching report in `input_dir`, ingest them in path order
/// and write both CSV datasets into `output_dir`.
pub fn ingest_directory(
    input_dir: &Path,
    needle: &str,
    output_dir: &Path,
    extractor: &dyn PdfExtractor,
) -> Result<IngestOutcome, EvregError> {
    let files = discovery::discover_reports(input_dir, needle)?;
    if files.is_empty() {
        tracing::warn!(dir = %input_dir.display(), needle, "no report files matched");
    }
    let outcome = ingest_reports(&files, extractor)?;
    export::write_outputs(&outcome, output_dir)?;
    Ok(outcome)
}

/// Extract and parse a single report (without accumulating).
pub fn parse_file(path: &Path, extractor: &dyn PdfExtractor) -> Result<ParsedReport, EvregError> {
    ReportIngestor::new(extractor).ingest_file(path, &ingest::source_name(path))
}
