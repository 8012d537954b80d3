pub mod date;
pub mod lines;
pub mod sections;

use crate::model::ParsedReport;
use date::resolve_report_date;
use lines::{parse_county_section, parse_zip_section};
use sections::{split_county, split_zip};

/// Turn one report's full text into tagged county and ZIP records.
///
/// A missing date, or a missing section, is not an error: the records carry
/// no date, or the section simply contributes nothing.
pub fn parse_report(text: &str, source_file: &str) -> ParsedReport {
    let date = resolve_report_date(text);
    if date.is_none() {
        tracing::warn!(file = source_file, "no as-of date found; records will be undated");
    }

    let county_body = split_county(text);
    if county_body.is_none() {
        tracing::warn!(file = source_file, "county totals section not found");
    }
    let county = county_body
        .map(parse_county_section)
        .unwrap_or_default()
        .into_iter()
        .map(|row| row.into_record(date, source_file))
        .collect();

    let zip_body = split_zip(text);
    if zip_body.is_none() {
        tracing::warn!(file = source_file, "zipcode totals section not found");
    }
    let zip = zip_body
        .map(parse_zip_section)
        .unwrap_or_default()
        .into_iter()
        .map(|row| row.into_record(date, source_file))
        .collect();

    ParsedReport {
        source_file: source_file.to_string(),
        date,
        county_section_found: county_body.is_some(),
        zip_section_found: zip_body.is_some(),
        county,
        zip,
    }
}
