pub mod pdftotext;
pub mod plain;

use crate::error::EvregError;

/// Appended after every page when pages are joined into one text blob.
pub const PAGE_SEPARATOR: char = '\n';

/// Text extracted from a single page of a report.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub text: String,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page
    /// in reading order.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, EvregError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Concatenate page texts in page order, with a separator after each page,
/// so section headers that straddle a page break can still be located.
pub fn join_pages(pages: &[PageContent]) -> String {
    let mut text = String::with_capacity(pages.iter().map(|p| p.text.len() + 1).sum());
    for page in pages {
        text.push_str(&page.text);
        text.push(PAGE_SEPARATOR);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_pages_appends_separator_per_page() {
        let pages = vec![
            PageContent {
                page_number: 1,
                text: "COUNTY TOTALS AS OF 09/15/2021".into(),
            },
            PageContent {
                page_number: 2,
                text: "ADAMS 12".into(),
            },
        ];
        assert_eq!(
            join_pages(&pages),
            "COUNTY TOTALS AS OF 09/15/2021\nADAMS 12\n"
        );
    }

    #[test]
    fn test_join_pages_empty() {
        assert_eq!(join_pages(&[]), "");
    }
}
