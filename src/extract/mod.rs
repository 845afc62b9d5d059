//! Plain text extraction from document containers.
//!
//! # Example
//!
//! ```no_run
//! use textstat::extract::DocumentExtractor;
//!
//! let text = DocumentExtractor::new("report.docx", "docx").extract_text()?;
//! println!("{}", text);
//! # Ok::<(), textstat::Error>(())
//! ```

#[cfg(feature = "docx")]
mod docx;
mod pdf;

#[cfg(feature = "docx")]
pub use docx::{
    decode_xml_bytes, extract_docx, extract_docx_from_reader, strip_markup, DOCUMENT_XML,
};

use crate::detect::FileType;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// A file path paired with its declared document type.
#[derive(Debug, Clone)]
pub struct DocumentExtractor {
    path: PathBuf,
    file_type: String,
}

impl DocumentExtractor {
    /// Create an extractor for `path`, declared as `file_type` (`"docx"` or `"pdf"`).
    pub fn new(path: impl Into<PathBuf>, file_type: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            file_type: file_type.into(),
        }
    }

    /// Path of the document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Declared document type as given.
    pub fn file_type(&self) -> &str {
        &self.file_type
    }

    /// Extract the document's plain text.
    ///
    /// The declared type is checked before the file is touched, so an
    /// unsupported type fails even for a path that does not exist.
    pub fn extract_text(&self) -> Result<String> {
        let file_type: FileType = self.file_type.parse()?;
        tracing::debug!(path = %self.path.display(), %file_type, "extracting text");

        match file_type {
            #[cfg(feature = "docx")]
            FileType::Docx => extract_docx(&self.path),
            #[cfg(not(feature = "docx"))]
            FileType::Docx => Err(crate::Error::UnsupportedType(self.file_type.clone())),
            FileType::Pdf => pdf::extract_pdf(&self.path),
        }
    }
}
