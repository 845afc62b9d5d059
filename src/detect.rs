//! Document type detection.

use crate::error::{Error, Result};
use std::path::Path;
use std::str::FromStr;

/// Document container types the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// Microsoft Word document (.docx)
    Docx,
    /// Portable Document Format (.pdf), not yet extracted
    Pdf,
}

impl FileType {
    /// Returns the file extension for this type.
    pub fn extension(&self) -> &'static str {
        match self {
            FileType::Docx => "docx",
            FileType::Pdf => "pdf",
        }
    }

    /// Returns a human-readable name for this type.
    pub fn name(&self) -> &'static str {
        match self {
            FileType::Docx => "Word Document",
            FileType::Pdf => "PDF Document",
        }
    }

    /// Detect a document type from a path's extension.
    ///
    /// Returns `None` for anything that should be read as plain text.
    ///
    /// # Example
    ///
    /// ```
    /// use textstat::detect::FileType;
    ///
    /// assert_eq!(FileType::from_path("report.DOCX"), Some(FileType::Docx));
    /// assert_eq!(FileType::from_path("notes.txt"), None);
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl FromStr for FileType {
    type Err = Error;

    /// Parse a declared type such as `"docx"` or `"pdf"`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "docx" => Ok(FileType::Docx),
            "pdf" => Ok(FileType::Pdf),
            _ => Err(Error::UnsupportedType(s.to_string())),
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_display() {
        assert_eq!(FileType::Docx.to_string(), "Word Document");
        assert_eq!(FileType::Pdf.to_string(), "PDF Document");
    }

    #[test]
    fn test_file_type_extension() {
        assert_eq!(FileType::Docx.extension(), "docx");
        assert_eq!(FileType::Pdf.extension(), "pdf");
    }

    #[test]
    fn test_parse_declared_type() {
        assert_eq!("docx".parse::<FileType>().unwrap(), FileType::Docx);
        assert_eq!(" PDF ".parse::<FileType>().unwrap(), FileType::Pdf);

        let err = "txt".parse::<FileType>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedType(ref t) if t == "txt"));
    }

    #[test]
    fn test_from_path() {
        assert_eq!(FileType::from_path("a/b/report.docx"), Some(FileType::Docx));
        assert_eq!(FileType::from_path("scan.pdf"), Some(FileType::Pdf));
        assert_eq!(FileType::from_path("essay.txt"), None);
        assert_eq!(FileType::from_path("README"), None);
    }
}
