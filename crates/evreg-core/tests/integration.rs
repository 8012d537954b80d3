//! Integration tests for the ingestion pipeline end to end.
//!
//! Uses a MockExtractor that treats file bytes as page text (pages split on
//! form feeds) without invoking pdftotext, so these tests run without
//! poppler-utils.

use chrono::NaiveDate;
use evreg_core::error::EvregError;
use evreg_core::export::{read_county_csv, read_zip_csv, COUNTY_CSV, ZIP_CSV};
use evreg_core::extraction::{PageContent, PdfExtractor};
use evreg_core::ingest::ReportIngestor;
use evreg_core::{ingest_directory, ingest_reports, parse_file};
use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;

struct MockExtractor;

impl PdfExtractor for MockExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, EvregError> {
        let text = String::from_utf8_lossy(pdf_bytes);
        if text.starts_with("CORRUPT") {
            return Err(EvregError::Extraction("damaged xref table".into()));
        }
        Ok(text
            .split('\x0c')
            .enumerate()
            .map(|(i, page)| PageContent {
                page_number: i + 1,
                text: page.to_string(),
            })
            .collect())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

fn write_report(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).unwrap();
    path
}

fn report_text(date: &str, counties: &[(&str, u64)], zips: &[(&str, &str, u64)]) -> String {
    let mut text = format!("ELECTRIC VEHICLES IN ILLINOIS\nCOUNTY TOTALS AS OF {date}\n");
    for (county, count) in counties {
        text.push_str(&format!("{county} ............ {count}\n"));
    }
    text.push_str(&format!(
        "ELECTRIC VEHICLES IN ILLINOIS ZIPCODE TOTALS AS OF {date}\n"
    ));
    for (city, zip, count) in zips {
        text.push_str(&format!("{city}        {zip}        {count}\n"));
    }
    text
}

// ---------------------------------------------------------------------------
// Test 1: Two reports ingested in the order supplied, every record tagged
// ---------------------------------------------------------------------------
#[test]
fn two_reports_tagged_and_ordered() {
    let dir = tempfile::tempdir().unwrap();
    let later = write_report(
        dir.path(),
        "electric_2022_01.pdf",
        &report_text(
            "01/01/2022",
            &[("ADAMS", 150), ("COOK", 9100)],
            &[("CHICAGO", "60601", 4000)],
        ),
    );
    let earlier = write_report(
        dir.path(),
        "electric_2021_09.pdf",
        &report_text(
            "09/15/2021",
            &[("ADAMS", 118)],
            &[("CHICAGO", "60601", 3421), ("ZION", "60099", 7)],
        ),
    );

    let outcome = ingest_reports(&[later, earlier], &MockExtractor).unwrap();

    let county: Vec<_> = outcome
        .county
        .iter()
        .map(|r| (r.source_file.as_str(), r.county_name.as_str(), r.count))
        .collect();
    assert_eq!(
        county,
        [
            ("electric_2022_01.pdf", "ADAMS", 150),
            ("electric_2022_01.pdf", "COOK", 9100),
            ("electric_2021_09.pdf", "ADAMS", 118),
        ]
    );
    assert_eq!(outcome.zip.len(), 3);
    assert!(outcome
        .zip
        .iter()
        .filter(|r| r.source_file == "electric_2021_09.pdf")
        .all(|r| r.date == NaiveDate::from_ymd_opt(2021, 9, 15)));

    let (county_sorted, _) = outcome.sort_chronologically();
    assert_eq!(county_sorted.as_slice()[0].source_file, "electric_2021_09.pdf");
}

// ---------------------------------------------------------------------------
// Test 2: A report without a ZIP header contributes no ZIP records and the
// run carries on with the next file
// ---------------------------------------------------------------------------
#[test]
fn missing_zip_section_does_not_abort() {
    let dir = tempfile::tempdir().unwrap();
    let broken = write_report(
        dir.path(),
        "electric_broken.pdf",
        "COUNTY TOTALS AS OF 03/01/2023\nADAMS 12\nELECTRIC VEHICLES IN ILLINOIS ZIPCODE TOTALS\n",
    );
    let good = write_report(
        dir.path(),
        "electric_good.pdf",
        &report_text("04/01/2023", &[("BOONE", 40)], &[("BELVIDERE", "61008", 39)]),
    );

    let outcome = ingest_reports(&[broken, good], &MockExtractor).unwrap();

    assert_eq!(outcome.files.len(), 2);
    assert_eq!(outcome.files[0].county_records, 1);
    assert_eq!(outcome.files[0].zip_records, 0);
    assert!(!outcome.files[0].zip_section_found);
    let no_zip: Vec<_> = outcome
        .files_without_zip()
        .map(|f| f.source_file.as_str())
        .collect();
    assert_eq!(no_zip, ["electric_broken.pdf"]);
    assert_eq!(outcome.zip.len(), 1);
    assert_eq!(outcome.zip.as_slice()[0].city_name, "BELVIDERE");
}

// ---------------------------------------------------------------------------
// Test 3: An undated report still yields records, with null dates
// ---------------------------------------------------------------------------
#[test]
fn undated_report_yields_null_dates() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_report(
        dir.path(),
        "electric_nodate.pdf",
        "COUNTY TOTALS AS OF\nADAMS 12\nZIPCODE TOTALS AS OF\nQUINCY 62301 5\n",
    );

    let outcome = ingest_reports(&[path], &MockExtractor).unwrap();
    assert_eq!(outcome.files[0].date, None);
    assert_eq!(outcome.county.as_slice()[0].date, None);
    assert_eq!(outcome.zip.as_slice()[0].date, None);
}

// ---------------------------------------------------------------------------
// Test 4: Extraction failure aborts the run and names the file
// ---------------------------------------------------------------------------
#[test]
fn extraction_failure_aborts_with_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_report(
        dir.path(),
        "electric_good.pdf",
        &report_text("04/01/2023", &[("BOONE", 40)], &[]),
    );
    let corrupt = write_report(dir.path(), "electric_corrupt.pdf", "CORRUPT");

    let err = ingest_reports(&[good, corrupt], &MockExtractor).unwrap_err();
    match &err {
        EvregError::FileFailed { file, source } => {
            assert_eq!(file, "electric_corrupt.pdf");
            assert!(matches!(**source, EvregError::Extraction(_)));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("electric_corrupt.pdf"));
}

// ---------------------------------------------------------------------------
// Test 5: A file that cannot be read is a per-file failure too
// ---------------------------------------------------------------------------
#[test]
fn unreadable_file_aborts_with_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("electric_missing.pdf");

    let err = ingest_reports(&[missing], &MockExtractor).unwrap_err();
    match err {
        EvregError::FileFailed { file, source } => {
            assert_eq!(file, "electric_missing.pdf");
            assert!(matches!(*source, EvregError::Io(_)));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Test 6: Cancellation is honoured between files
// ---------------------------------------------------------------------------
#[test]
fn cancelled_run_stops_before_next_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_report(
        dir.path(),
        "electric_a.pdf",
        &report_text("04/01/2023", &[("BOONE", 40)], &[]),
    );

    let extractor = MockExtractor;
    let ingestor = ReportIngestor::new(&extractor);
    ingestor.cancel_flag().store(true, Ordering::Relaxed);

    let err = ingestor.ingest(&[path]).unwrap_err();
    assert!(matches!(err, EvregError::Cancelled { ref next_file } if next_file == "electric_a.pdf"));
}

// ---------------------------------------------------------------------------
// Test 7: N county lines among filler lines yield exactly N records in order
// ---------------------------------------------------------------------------
#[test]
fn county_rows_among_filler_keep_order() {
    let dir = tempfile::tempdir().unwrap();
    let text = "\
COUNTY TOTALS AS OF 09/15/2021
ADAMS ......... 118

ALEXANDER..... 2
Page 1 of 3
\x0cELECTRIC VEHICLES IN ILLINOIS
COUNTY TOTALS AS OF 09/15/2021
BOND     31
2
BOONE.........40
ELECTRIC VEHICLES IN ILLINOIS
ZIPCODE TOTALS AS OF 09/15/2021
";
    let path = write_report(dir.path(), "electric_multi_page.pdf", text);

    let report = parse_file(&path, &MockExtractor).unwrap();
    let names: Vec<_> = report.county.iter().map(|r| r.county_name.as_str()).collect();
    assert_eq!(names, ["ADAMS", "ALEXANDER", "BOND", "BOONE"]);
    assert!(report.zip.is_empty());
    assert!(report.zip_section_found);
}

// ---------------------------------------------------------------------------
// Test 8: Directory ingestion discovers reports and writes both datasets
// ---------------------------------------------------------------------------
#[test]
fn ingest_directory_writes_csvs() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_report(
        input.path(),
        "electric_2021_09.pdf",
        &report_text("09/15/2021", &[("ADAMS", 118)], &[("SOMEWHERE", "00501", 3)]),
    );
    write_report(
        input.path(),
        "electric_2022_01.pdf",
        &report_text("01/01/2022", &[("ADAMS", 150)], &[("SOMEWHERE", "00501", 9)]),
    );
    write_report(input.path(), "gasoline_2022_01.pdf", "CORRUPT");

    let outcome =
        ingest_directory(input.path(), "electric", output.path(), &MockExtractor).unwrap();
    assert_eq!(outcome.files.len(), 2);

    let county_file = std::fs::File::open(output.path().join(COUNTY_CSV)).unwrap();
    let county = read_county_csv(county_file).unwrap();
    assert_eq!(county, outcome.county.clone().into_vec());

    let zip_file = std::fs::File::open(output.path().join(ZIP_CSV)).unwrap();
    let zip = read_zip_csv(zip_file).unwrap();
    assert_eq!(zip.len(), 2);
    assert!(zip.iter().all(|r| r.zip_code == "00501"));
    assert_eq!(zip[1].date, NaiveDate::from_ymd_opt(2022, 1, 1));
}
