use crate::model::ReportDate;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static AS_OF_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"AS OF\s+(\d{2}/\d{2}/\d{4})").expect("as-of date pattern is valid")
});

/// Find the report's as-of date: the first `AS OF MM/DD/YYYY` in the text.
/// Any whitespace run may separate the marker from the date, including a
/// line break left by layout extraction.
///
/// Later occurrences (one per section in some report vintages) are ignored.
/// Returns `None` when no marker is followed by a date token, or when the
/// first token is not a real calendar date.
pub fn resolve_report_date(text: &str) -> Option<ReportDate> {
    let caps = AS_OF_DATE.captures(text)?;
    NaiveDate::parse_from_str(&caps[1], "%m/%d/%Y").ok()
}
