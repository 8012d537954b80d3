use evreg_core::extraction::pdftotext::PdftotextExtractor;
use evreg_core::extraction::plain::PlainTextExtractor;
use evreg_core::extraction::PdfExtractor;
use std::path::PathBuf;

use crate::output::{self, OutputFormat};

pub fn run(
    input_file: PathBuf,
    output_format: OutputFormat,
) -> Result<(), evreg_core::error::EvregError> {
    // Determine input type by extension
    let is_text = input_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false);

    let extractor: Box<dyn PdfExtractor> = if is_text {
        Box::new(PlainTextExtractor)
    } else {
        Box::new(PdftotextExtractor::new())
    };
    let parsed = evreg_core::parse_file(&input_file, extractor.as_ref())?;

    match output_format {
        OutputFormat::Json => output::json::print(&parsed)?,
        OutputFormat::Table => output::table::print_parsed(&parsed),
    }

    Ok(())
}
