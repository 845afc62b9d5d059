//! # textstat
//!
//! Readability statistics for plain text and Word documents.
//!
//! The library has two independent halves: a text statistics engine
//! (word, sentence and syllable counts plus the Flesch-Kincaid, Gunning Fog
//! and SMOG readability scores) and a document extractor that pulls plain
//! text out of DOCX files.
//!
//! ## Quick Start
//!
//! ```no_run
//! use textstat::{analyze, render, DocumentExtractor, RenderOptions};
//!
//! // Statistics for a string
//! let stats = analyze("The quick brown fox jumps. The dog sleeps!");
//! println!("Words: {}", stats.word_count);
//!
//! // Statistics for a Word document
//! let text = DocumentExtractor::new("report.docx", "docx").extract_text()?;
//! let stats = analyze(&text);
//! println!("{}", render::render(&stats, &RenderOptions::default())?);
//! # Ok::<(), textstat::Error>(())
//! ```
//!
//! ## Features
//!
//! - `docx` (default): Word document extraction

pub mod detect;
pub mod error;
pub mod extract;
pub mod readability;
pub mod render;
pub mod stats;
pub mod syllable;
pub mod tokenize;

// Re-exports
pub use detect::FileType;
pub use error::{Error, Result};
pub use extract::DocumentExtractor;
pub use readability::{EnglishLevel, FogBand, Readability, SmogBand};
pub use render::{Formatter, OutputFormat, RenderOptions};
pub use stats::{analyze, analyze_with_top, TextStats};

use std::io::BufRead;
use std::path::Path;

/// Read text line by line, terminating every line with `\n`.
///
/// `\r\n` endings are normalized to `\n`. Bytes that are not valid UTF-8
/// are replaced with U+FFFD rather than failing the read.
pub fn read_lines(mut reader: impl BufRead) -> Result<String> {
    let mut text = String::new();
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        let content = line
            .strip_suffix(b"\n")
            .map(|l| l.strip_suffix(b"\r").unwrap_or(l))
            .unwrap_or(&line);
        text.push_str(&String::from_utf8_lossy(content));
        text.push('\n');
    }
    Ok(text)
}

/// Load the text of a file for analysis.
///
/// DOCX and PDF files (by extension) go through [`DocumentExtractor`];
/// anything else is read as plain text with [`read_lines`].
///
/// # Example
///
/// ```no_run
/// let text = textstat::load_text("essay.txt")?;
/// let stats = textstat::analyze(&text);
/// # Ok::<(), textstat::Error>(())
/// ```
pub fn load_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    match FileType::from_path(path) {
        Some(file_type) => {
            DocumentExtractor::new(path, file_type.extension()).extract_text()
        }
        None => {
            tracing::debug!(path = %path.display(), "reading plain text");
            let file = std::fs::File::open(path)?;
            read_lines(std::io::BufReader::new(file))
        }
    }
}
