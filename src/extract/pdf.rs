//! PDF extraction placeholder.

use crate::error::Result;
use std::path::Path;

/// PDF text extraction is not implemented; yields an empty string.
pub(crate) fn extract_pdf(path: &Path) -> Result<String> {
    tracing::warn!(path = %path.display(), "PDF text extraction is not implemented");
    Ok(String::new())
}
