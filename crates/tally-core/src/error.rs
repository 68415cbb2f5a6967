use std::path::PathBuf;

/// Broad failure class: the file could not be read, or it could not be
/// interpreted as a PDF document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Parse,
}

#[derive(Debug, thiserror::Error)]
pub enum TallyError {
    #[error("cannot open {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to parse PDF: {0}")]
    Parse(String),

    #[error("PDF is encrypted and no credentials are available")]
    Encrypted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TallyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TallyError::FileOpen { .. } | TallyError::Io(_) => ErrorKind::Io,
            TallyError::Extraction(_)
            | TallyError::PdftotextNotFound
            | TallyError::PdftotextFailed { .. }
            | TallyError::Parse(_)
            | TallyError::Encrypted => ErrorKind::Parse,
        }
    }
}

impl From<lopdf::Error> for TallyError {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => TallyError::Io(e),
            lopdf::Error::Decryption(_) => TallyError::Encrypted,
            _ => TallyError::Parse(err.to_string()),
        }
    }
}
