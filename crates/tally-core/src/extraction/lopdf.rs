//! In-process extraction backend built on lopdf.

use lopdf::Document;

use crate::error::TallyError;
use crate::extraction::{PageContent, PdfExtractor};

/// Parses the PDF in memory; needs no external tools.
pub struct LopdfExtractor;

impl LopdfExtractor {
    pub fn new() -> Self {
        LopdfExtractor
    }
}

impl Default for LopdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for LopdfExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, TallyError> {
        let doc = Document::load_mem(pdf_bytes)?;
        if doc.is_encrypted() {
            return Err(TallyError::Encrypted);
        }

        // get_pages() is keyed by page number, so iteration is document order.
        let mut pages = Vec::new();
        for (i, page_num) in doc.get_pages().into_keys().enumerate() {
            let text = doc
                .extract_text(&[page_num])
                .map_err(|e| TallyError::Extraction(format!("page {}: {}", page_num, e)))?;
            pages.push(PageContent {
                page_number: i + 1,
                text,
            });
        }

        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "lopdf"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn rejects_non_pdf_bytes() {
        let err = LopdfExtractor::new()
            .extract_pages(b"this is not a PDF document")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }
}
