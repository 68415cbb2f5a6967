pub mod count;
pub mod error;
pub mod extraction;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use count::WordTally;
use error::TallyError;
use extraction::PdfExtractor;

/// Main API entry point: total number of whitespace-delimited words in the
/// PDF at `path`.
pub fn count_words<P: AsRef<Path>>(
    path: P,
    extractor: &dyn PdfExtractor,
) -> Result<usize, TallyError> {
    Ok(tally_file(path, extractor)?.total())
}

/// Read the PDF at `path` and count words page by page.
///
/// The file handle lives only inside the read block and is closed before
/// extraction starts, on success and on error alike.
pub fn tally_file<P: AsRef<Path>>(
    path: P,
    extractor: &dyn PdfExtractor,
) -> Result<WordTally, TallyError> {
    let path = path.as_ref();
    let pdf_bytes = {
        let mut file = File::open(path).map_err(|source| TallyError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)?;
        buf
    };
    log::debug!("read {} bytes from {}", pdf_bytes.len(), path.display());

    tally_pdf(&pdf_bytes, extractor)
}

/// Count words in an in-memory PDF.
pub fn tally_pdf(pdf_bytes: &[u8], extractor: &dyn PdfExtractor) -> Result<WordTally, TallyError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    log::info!(
        "{} extracted {} page(s)",
        extractor.backend_name(),
        pages.len()
    );

    Ok(count::tally_pages(&pages))
}
