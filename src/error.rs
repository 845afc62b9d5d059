//! Error types for the textstat library.

use std::io;
use thiserror::Error;

/// Result type alias for textstat operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting or reporting on text.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document container could not be opened as a ZIP archive.
    #[error("Failed to open archive: {0}")]
    ArchiveOpen(String),

    /// A required entry is missing from the archive.
    #[error("{0} not found in the DOCX file")]
    EntryNotFound(String),

    /// The declared document type is not handled by the extractor.
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    /// An archive entry was found but could not be read.
    #[error("Failed to read {entry}: {reason}")]
    Read {
        /// Archive entry name
        entry: String,
        /// Underlying failure
        reason: String,
    },

    /// Error during report rendering.
    #[error("Render error: {0}")]
    Render(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ArchiveOpen(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Render(format!("JSON serialization error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedType("txt".to_string());
        assert_eq!(err.to_string(), "Unsupported file type: txt");

        let err = Error::EntryNotFound("word/document.xml".to_string());
        assert_eq!(
            err.to_string(),
            "word/document.xml not found in the DOCX file"
        );

        let err = Error::Read {
            entry: "word/document.xml".to_string(),
            reason: "unexpected end of file".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read word/document.xml: unexpected end of file"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_zip() {
        let err: Error = zip::result::ZipError::InvalidArchive("bad header".into()).into();
        assert!(matches!(err, Error::ArchiveOpen(_)));
    }
}
