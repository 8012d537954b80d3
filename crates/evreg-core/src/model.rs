use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The calendar date a report's cumulative counts are valid for.
pub type ReportDate = NaiveDate;

/// One county's cumulative registration count as of `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountyRecord {
    #[serde(rename = "Date")]
    pub date: Option<ReportDate>,
    #[serde(rename = "County")]
    pub county_name: String,
    #[serde(rename = "Count")]
    pub count: u64,
    #[serde(rename = "Source File")]
    pub source_file: String,
}

/// One (city, ZIP code) pair's cumulative registration count as of `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipRecord {
    #[serde(rename = "Date")]
    pub date: Option<ReportDate>,
    #[serde(rename = "City")]
    pub city_name: String,
    /// Five digits, kept as text so leading zeros survive.
    #[serde(rename = "ZIP Code")]
    pub zip_code: String,
    #[serde(rename = "Count")]
    pub count: u64,
    #[serde(rename = "Source File")]
    pub source_file: String,
}

/// Common view over both record kinds, used for sorting and analysis.
pub trait DatedRecord {
    fn date(&self) -> Option<ReportDate>;
    fn count(&self) -> u64;
}

impl DatedRecord for CountyRecord {
    fn date(&self) -> Option<ReportDate> {
        self.date
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl DatedRecord for ZipRecord {
    fn date(&self) -> Option<ReportDate> {
        self.date
    }

    fn count(&self) -> u64 {
        self.count
    }
}

/// Append-only, insertion-ordered sequence of records of one kind.
///
/// Records cannot be removed or mutated once pushed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordCollection<T> {
    records: Vec<T>,
}

impl<T> Default for RecordCollection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T> RecordCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: T) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn into_vec(self) -> Vec<T> {
        self.records
    }
}

impl<T> Extend<T> for RecordCollection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl<T> FromIterator<T> for RecordCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a RecordCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl<T: DatedRecord + Clone> RecordCollection<T> {
    /// A copy stably sorted by date, null dates last. Records sharing a date
    /// keep their discovery order.
    pub fn sorted_by_date(&self) -> RecordCollection<T> {
        let mut records = self.records.clone();
        records.sort_by_key(|r| (r.date().is_none(), r.date()));
        RecordCollection { records }
    }
}

/// Records and diagnostics produced from one report's text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedReport {
    pub source_file: String,
    pub date: Option<ReportDate>,
    pub county_section_found: bool,
    pub zip_section_found: bool,
    pub county: Vec<CountyRecord>,
    pub zip: Vec<ZipRecord>,
}

/// Per-file quality signal for an ingestion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSummary {
    pub source_file: String,
    pub date: Option<ReportDate>,
    pub county_section_found: bool,
    pub zip_section_found: bool,
    pub county_records: usize,
    pub zip_records: usize,
}

impl From<&ParsedReport> for FileSummary {
    fn from(report: &ParsedReport) -> Self {
        FileSummary {
            source_file: report.source_file.clone(),
            date: report.date,
            county_section_found: report.county_section_found,
            zip_section_found: report.zip_section_found,
            county_records: report.county.len(),
            zip_records: report.zip.len(),
        }
    }
}

impl fmt::Display for FileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self
            .date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "no date".into());
        write!(
            f,
            "{} ({}): {} county, {} zip",
            self.source_file, date, self.county_records, self.zip_records
        )
    }
}

/// Result of ingesting a list of report files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngestOutcome {
    pub county: RecordCollection<CountyRecord>,
    pub zip: RecordCollection<ZipRecord>,
    pub files: Vec<FileSummary>,
}

impl IngestOutcome {
    /// Append one report's records. The whole report lands at once.
    pub fn append(&mut self, report: ParsedReport) {
        self.files.push(FileSummary::from(&report));
        self.county.extend(report.county);
        self.zip.extend(report.zip);
    }

    pub fn files_without_county(&self) -> impl Iterator<Item = &FileSummary> {
        self.files.iter().filter(|f| f.county_records == 0)
    }

    pub fn files_without_zip(&self) -> impl Iterator<Item = &FileSummary> {
        self.files.iter().filter(|f| f.zip_records == 0)
    }

    /// Both collections in chronological order, for time-series consumers.
    pub fn sort_chronologically(
        &self,
    ) -> (RecordCollection<CountyRecord>, RecordCollection<ZipRecord>) {
        (self.county.sorted_by_date(), self.zip.sorted_by_date())
    }
}
