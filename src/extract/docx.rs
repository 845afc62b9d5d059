//! DOCX text extraction.
//!
//! Reads `word/document.xml` out of the ZIP container and strips the
//! paragraph, text-run and tab markup with literal replacements. This is
//! not an XML parser: any other markup is left in the output.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use zip::result::ZipError;

/// Archive entry holding the main document body.
pub const DOCUMENT_XML: &str = "word/document.xml";

/// Literal replacements applied in order by [`strip_markup`].
const MARKUP_REPLACEMENTS: [(&str, &str); 5] = [
    ("<w:p>", ""),
    ("</w:p>", "\n"),
    ("<w:t>", ""),
    ("</w:t>", ""),
    ("<w:tab/>", "    "),
];

/// Extract plain text from a DOCX file on disk.
pub fn extract_docx(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| Error::ArchiveOpen(format!("{}: {}", path.display(), e)))?;
    extract_docx_from_reader(BufReader::new(file))
}

/// Extract plain text from a DOCX archive held by any seekable reader.
///
/// # Example
///
/// ```no_run
/// use textstat::extract::extract_docx_from_reader;
///
/// let data = std::fs::read("report.docx")?;
/// let text = extract_docx_from_reader(std::io::Cursor::new(data))?;
/// # Ok::<(), textstat::Error>(())
/// ```
pub fn extract_docx_from_reader<R: Read + Seek>(reader: R) -> Result<String> {
    let mut archive = zip::ZipArchive::new(reader)?;
    tracing::debug!(entries = archive.len(), "opened DOCX archive");

    let mut entry = archive.by_name(DOCUMENT_XML).map_err(|e| match e {
        ZipError::FileNotFound => Error::EntryNotFound(DOCUMENT_XML.to_string()),
        other => read_error(other),
    })?;

    let mut bytes = Vec::new();
    entry.read_to_end(&mut bytes).map_err(read_error)?;

    let xml = decode_xml_bytes(&bytes)?;
    Ok(strip_markup(&xml))
}

fn read_error(err: impl std::fmt::Display) -> Error {
    Error::Read {
        entry: DOCUMENT_XML.to_string(),
        reason: err.to_string(),
    }
}

/// Strip paragraph, text-run and tab markup from WordprocessingML.
///
/// Paragraph ends become newlines and tabs become four spaces. The result
/// is trimmed.
///
/// # Example
///
/// ```
/// use textstat::extract::strip_markup;
///
/// let xml = "<w:p><w:t>Hello</w:t><w:tab/><w:t>World</w:t></w:p>";
/// assert_eq!(strip_markup(xml), "Hello    World");
/// ```
pub fn strip_markup(xml: &str) -> String {
    let text = MARKUP_REPLACEMENTS
        .iter()
        .fold(xml.to_string(), |text, (from, to)| text.replace(from, to));
    text.trim().to_string()
}

/// Decode XML bytes handling different encodings (UTF-8, UTF-16 LE/BE).
///
/// A BOM selects the encoding; without one the bytes are read as UTF-8,
/// replacing invalid sequences.
pub fn decode_xml_bytes(bytes: &[u8]) -> Result<String> {
    if let Some(rest) = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        return Ok(String::from_utf8_lossy(rest).into_owned());
    }
    if let Some(rest) = bytes.strip_prefix(&[0xFF, 0xFE]) {
        return decode_utf16(rest, u16::from_le_bytes);
    }
    if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        return decode_utf16(rest, u16::from_be_bytes);
    }
    Ok(String::from_utf8_lossy(bytes).into_owned())
}

fn decode_utf16(bytes: &[u8], to_unit: fn([u8; 2]) -> u16) -> Result<String> {
    let chunks = bytes.chunks_exact(2);
    if !chunks.remainder().is_empty() {
        return Err(read_error("odd number of bytes in UTF-16 content"));
    }
    let units = chunks.map(|pair| to_unit([pair[0], pair[1]]));
    char::decode_utf16(units)
        .collect::<std::result::Result<String, _>>()
        .map_err(read_error)
}
