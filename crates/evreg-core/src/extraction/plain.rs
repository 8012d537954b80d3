use crate::error::EvregError;
use crate::extraction::{PageContent, PdfExtractor};

/// Backend for reports whose text has already been extracted to a `.txt`
/// file. The whole input is treated as a single page.
pub struct PlainTextExtractor;

impl PdfExtractor for PlainTextExtractor {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<PageContent>, EvregError> {
        if bytes.is_empty() {
            return Err(EvregError::Extraction("text file is empty".into()));
        }
        Ok(vec![PageContent {
            page_number: 1,
            text: String::from_utf8_lossy(bytes).into_owned(),
        }])
    }

    fn backend_name(&self) -> &str {
        "plain-text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_single_page() {
        let pages = PlainTextExtractor.extract_pages(b"ADAMS 12").unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].text, "ADAMS 12");
    }

    #[test]
    fn test_plain_text_empty_fails() {
        assert!(PlainTextExtractor.extract_pages(b"").is_err());
    }
}
