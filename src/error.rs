use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a parse request.
///
/// Extractors themselves never fail; every variant here comes from input
/// validation or from the document readers.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Please select a file first")]
    MissingInput,

    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),
}

pub type Result<T> = std::result::Result<T, ParseError>;
