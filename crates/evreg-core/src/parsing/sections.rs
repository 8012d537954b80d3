//! Locate the county-totals and ZIP-totals bodies inside a report's text.
//!
//! The county body runs from the line after `COUNTY TOTALS AS OF ...` up to
//! the first ZIP-section header. That header has been printed several ways
//! across report vintages, so every known spelling is tried.

pub const COUNTY_HEADER: &str = "COUNTY TOTALS AS OF";
pub const ZIP_HEADER: &str = "ZIPCODE TOTALS AS OF";

/// Known spellings of the header that ends the county section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZipSectionMarker {
    /// Report title and section title on one line.
    TitleSameLine,
    /// Title wrapped onto its own line before the section title.
    TitleLineBreak,
    /// Same as `TitleLineBreak`, with a CRLF line ending.
    TitleCrlfLineBreak,
    /// Section title with no report title in front of it.
    SectionHeader,
}

impl ZipSectionMarker {
    /// Priority order: when two spellings match at the same offset, the
    /// earlier one here wins.
    pub const ALL: [ZipSectionMarker; 4] = [
        ZipSectionMarker::TitleSameLine,
        ZipSectionMarker::TitleLineBreak,
        ZipSectionMarker::TitleCrlfLineBreak,
        ZipSectionMarker::SectionHeader,
    ];

    pub fn literal(self) -> &'static str {
        match self {
            ZipSectionMarker::TitleSameLine => "ELECTRIC VEHICLES IN ILLINOIS ZIPCODE TOTALS",
            ZipSectionMarker::TitleLineBreak => "ELECTRIC VEHICLES IN ILLINOIS\nZIPCODE TOTALS",
            ZipSectionMarker::TitleCrlfLineBreak => {
                "ELECTRIC VEHICLES IN ILLINOIS\r\nZIPCODE TOTALS"
            }
            ZipSectionMarker::SectionHeader => ZIP_HEADER,
        }
    }

    /// Earliest occurrence of any marker in `text`, with the marker found.
    pub fn find_first(text: &str) -> Option<(usize, ZipSectionMarker)> {
        Self::ALL
            .iter()
            .filter_map(|&m| text.find(m.literal()).map(|pos| (pos, m)))
            .min_by_key(|&(pos, m)| (pos, m as usize))
    }
}

/// Text following the line that contains `header`, or `None` if the header
/// is absent or is the last line of the text.
fn body_after_header<'a>(text: &'a str, header: &str) -> Option<&'a str> {
    let start = text.find(header)?;
    let after_header = &text[start + header.len()..];
    let newline = after_header.find('\n')?;
    Some(&after_header[newline + 1..])
}

/// The county-totals body, or `None` if either the county header or every
/// ZIP-section marker is missing.
pub fn split_county(text: &str) -> Option<&str> {
    let body = body_after_header(text, COUNTY_HEADER)?;
    let (end, marker) = ZipSectionMarker::find_first(body)?;
    tracing::debug!(?marker, offset = end, "county section terminator found");
    Some(&body[..end])
}

/// The ZIP-totals body: everything after the ZIP header line.
pub fn split_zip(text: &str) -> Option<&str> {
    body_after_header(text, ZIP_HEADER)
}
