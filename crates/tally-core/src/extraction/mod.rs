pub mod lopdf;
pub mod pdftotext;

use crate::error::TallyError;

/// Text extracted from a single page of a PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    /// 1-based position in document order.
    pub page_number: usize,
    pub text: String,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per
    /// page in document order.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, TallyError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Pick pdftotext when poppler is installed, otherwise parse in-process.
pub fn default_extractor() -> Box<dyn PdfExtractor> {
    if pdftotext::PdftotextExtractor::is_available() {
        log::info!("using pdftotext for text extraction");
        Box::new(pdftotext::PdftotextExtractor::new())
    } else {
        log::info!("pdftotext not on PATH, falling back to lopdf");
        Box::new(lopdf::LopdfExtractor::new())
    }
}
