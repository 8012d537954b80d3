use evreg_core::error::EvregError;
use evreg_core::model::ParsedReport;

pub fn print(report: &ParsedReport) -> Result<(), EvregError> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}
