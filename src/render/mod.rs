//! Output rendering for statistics reports.
//!
//! One set of report rows feeds every layout. Each layout implements
//! [`Formatter`], and [`render`] picks one from [`RenderOptions`].
//!
//! # Example
//!
//! ```
//! use textstat::render::{render, OutputFormat, RenderOptions};
//!
//! let stats = textstat::analyze("The cat sat. The dog ran.");
//! let report = render(&stats, &RenderOptions::new().with_format(OutputFormat::Lines))?;
//! assert!(report.starts_with("Word count: 6"));
//! # Ok::<(), textstat::Error>(())
//! ```

mod json;
mod lines;
mod options;
mod table;

pub use json::{to_json, JsonFormatter};
pub use lines::LinesFormatter;
pub use options::{JsonFormat, OutputFormat, RenderOptions};
pub use table::TableFormatter;

use crate::error::Result;
use crate::stats::TextStats;

/// Placeholder for scores that could not be computed.
pub const NOT_AVAILABLE: &str = "n/a";

/// Turns computed statistics into a printable report.
pub trait Formatter {
    /// Render a report for `stats`.
    fn format(&self, stats: &TextStats) -> Result<String>;
}

/// Render a report using the layout selected in `options`.
pub fn render(stats: &TextStats, options: &RenderOptions) -> Result<String> {
    formatter_for(options).format(stats)
}

/// Build the formatter for the layout selected in `options`.
pub fn formatter_for(options: &RenderOptions) -> Box<dyn Formatter> {
    match options.format {
        OutputFormat::Table => Box::new(TableFormatter::new(options.precision)),
        OutputFormat::Lines => Box::new(LinesFormatter::new(options.precision)),
        OutputFormat::Json => Box::new(JsonFormatter::new(options.json_format)),
    }
}

/// One metric in a report.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Metric name
    pub metric: String,
    /// Formatted value
    pub value: String,
    /// Band description, for readability scores
    pub interpretation: Option<&'static str>,
}

impl Row {
    fn new(metric: impl Into<String>, value: impl ToString) -> Self {
        Self {
            metric: metric.into(),
            value: value.to_string(),
            interpretation: None,
        }
    }

    fn interpreted(metric: &str, value: String, interpretation: &'static str) -> Self {
        Self {
            metric: metric.to_string(),
            value,
            interpretation: Some(interpretation),
        }
    }
}

/// Build report rows shared by the text layouts.
pub fn rows(stats: &TextStats, precision: usize) -> Vec<Row> {
    let mut rows = vec![
        Row::new("Word count", stats.word_count),
        Row::new("Letter count", stats.letter_count),
        Row::new("Sentence count", stats.sentence_count),
        Row::new("Paragraph count", stats.paragraph_count),
        Row::new(
            "Average word length",
            format!("{:.*}", precision, stats.average_word_length),
        ),
        Row::new(
            "Average sentence length",
            format!("{:.*} words", precision, stats.average_sentence_length),
        ),
        Row::new("Longest word", &stats.longest_word),
        Row::new("Most common word", &stats.most_common_word),
        Row::new("Unique word count", stats.unique_word_count),
    ];

    match stats.readability {
        Some(r) => {
            rows.push(Row::interpreted(
                "Flesch-Kincaid Grade Level",
                format!("{:.*}", precision, r.flesch_kincaid_grade),
                r.english_level.label(),
            ));
            rows.push(Row::interpreted(
                "Gunning Fog Index",
                format!("{:.*}", precision, r.gunning_fog_index),
                r.fog_band.description(),
            ));
            rows.push(Row::interpreted(
                "SMOG Grade",
                format!("{:.*}", precision, r.smog_grade),
                r.smog_band.description(),
            ));
        }
        None => {
            for metric in ["Flesch-Kincaid Grade Level", "Gunning Fog Index", "SMOG Grade"] {
                rows.push(Row::new(metric, NOT_AVAILABLE));
            }
        }
    }

    for (rank, (word, count)) in stats.top_words.iter().enumerate() {
        rows.push(Row::new(
            format!("Top word #{}", rank + 1),
            format!("{} ({})", word, count),
        ));
    }

    rows
}
