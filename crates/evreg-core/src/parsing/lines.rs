use crate::model::{CountyRecord, ReportDate, ZipRecord};
use regex::Regex;
use std::sync::LazyLock;

/// `<name><dot-leader/whitespace run><count>`, anchored at the start only.
///
/// The name is non-greedy, starts with a letter and ends with a letter or
/// apostrophe, so trailing dot-leaders are never folded into it and a minus
/// sign in front of the count makes the line fail. The count must end at
/// whitespace or the end of the line; anything after it (a share column, a
/// second county column) is ignored.
static COUNTY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z](?:[A-Z .'-]*?[A-Z'])?)[.\s]*(\d+)(?:\s|$)")
        .expect("county line pattern is valid")
});

/// `<name><ws><5-digit zip><ws><count>`. The name is greedy; the ZIP anchors it.
static ZIP_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z][A-Z .'-]*)\s+(\d{5})\s+(\d+)(?:\s|$)")
        .expect("zip line pattern is valid")
});

/// A county row before it is tagged with its report's date and file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountyLine {
    pub county_name: String,
    pub count: u64,
}

impl CountyLine {
    pub fn into_record(self, date: Option<ReportDate>, source_file: &str) -> CountyRecord {
        CountyRecord {
            date,
            county_name: self.county_name,
            count: self.count,
            source_file: source_file.to_string(),
        }
    }
}

/// A city/ZIP row before it is tagged with its report's date and file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipLine {
    pub city_name: String,
    pub zip_code: String,
    pub count: u64,
}

impl ZipLine {
    pub fn into_record(self, date: Option<ReportDate>, source_file: &str) -> ZipRecord {
        ZipRecord {
            date,
            city_name: self.city_name,
            zip_code: self.zip_code,
            count: self.count,
            source_file: source_file.to_string(),
        }
    }
}

/// Parse one line of the county section. Returns `None` for anything that is
/// not a county row (blank lines, headers, mixed-case page footers) and for
/// counts that do not fit in a `u64`.
pub fn parse_county_line(line: &str) -> Option<CountyLine> {
    let caps = COUNTY_LINE.captures(line.trim())?;
    let count = caps[2].parse().ok()?;
    Some(CountyLine {
        county_name: caps[1].trim().to_string(),
        count,
    })
}

/// Parse one line of the ZIP section.
pub fn parse_zip_line(line: &str) -> Option<ZipLine> {
    let caps = ZIP_LINE.captures(line.trim())?;
    let count = caps[3].parse().ok()?;
    Some(ZipLine {
        city_name: caps[1].trim().to_string(),
        zip_code: caps[2].to_string(),
        count,
    })
}

/// Every county row in a section body, in line order.
pub fn parse_county_section(body: &str) -> Vec<CountyLine> {
    parse_section(body, parse_county_line)
}

/// Every city/ZIP row in a section body, in line order.
pub fn parse_zip_section(body: &str) -> Vec<ZipLine> {
    parse_section(body, parse_zip_line)
}

fn parse_section<T>(body: &str, parse_line: fn(&str) -> Option<T>) -> Vec<T> {
    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(row) => rows.push(row),
            None => skipped += 1,
        }
    }

    tracing::debug!(rows = rows.len(), skipped, "section parsed");
    rows
}
