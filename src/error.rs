//! Error types for the mdocx library.

use std::io;
use thiserror::Error;

/// Result type alias for mdocx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while exporting documents.
///
/// Markdown conversion itself has no error path: malformed input always
/// degrades to a plainer rendering. Errors here come from the I/O and
/// packaging boundaries around it.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error serializing or deserializing a draft.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error assembling or packaging the DOCX archive.
    #[error("DOCX packaging error: {0}")]
    Docx(String),

    /// A section name did not match any known section.
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<docx_rs::DocxError> for Error {
    fn from(err: docx_rs::DocxError) -> Self {
        Error::Docx(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownSection("Budget".to_string());
        assert_eq!(err.to_string(), "Unknown section: Budget");

        let err = Error::Docx("zip failure".to_string());
        assert_eq!(err.to_string(), "DOCX packaging error: zip failure");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
