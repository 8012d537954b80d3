use evreg_core::error::EvregError;
use evreg_core::extraction::pdftotext::PdftotextExtractor;
use std::path::Path;

use crate::output;

pub fn run(input_dir: &Path, pattern: &str, out_dir: &Path) -> Result<(), EvregError> {
    if !PdftotextExtractor::is_available() {
        return Err(EvregError::PdftotextNotFound);
    }
    let extractor = PdftotextExtractor::new();
    let outcome = evreg_core::ingest_directory(input_dir, pattern, out_dir, &extractor)?;

    output::table::print_ingest(&outcome);
    eprintln!(
        "Wrote {} county and {} zip record(s) to {}",
        outcome.county.len(),
        outcome.zip.len(),
        out_dir.display()
    );
    Ok(())
}
