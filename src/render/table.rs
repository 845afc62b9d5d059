//! Aligned table renderer.

use crate::error::Result;
use crate::stats::TextStats;
use unicode_width::UnicodeWidthStr;

use super::{rows, Formatter, Row};

const HEADER: [&str; 3] = ["Metric", "Value", "Interpretation"];
const COLUMN_GAP: &str = "  ";

/// Renders a three-column `Metric | Value | Interpretation` table.
///
/// Columns are padded by display width, so wide characters in the longest
/// or most common word keep the table aligned.
#[derive(Debug, Clone, Copy)]
pub struct TableFormatter {
    precision: usize,
}

impl TableFormatter {
    /// Create a formatter printing floats with `precision` decimals.
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }
}

impl Formatter for TableFormatter {
    fn format(&self, stats: &TextStats) -> Result<String> {
        let rows = rows(stats, self.precision);

        let metric_width = column_width(HEADER[0], rows.iter().map(|r| r.metric.as_str()));
        let value_width = column_width(HEADER[1], rows.iter().map(|r| r.value.as_str()));

        let mut output = String::new();
        push_line(&mut output, HEADER, metric_width, value_width);

        let rule_width = metric_width + value_width + HEADER[2].width() + 2 * COLUMN_GAP.len();
        output.push_str(&"─".repeat(rule_width));
        output.push('\n');

        for Row {
            metric,
            value,
            interpretation,
        } in &rows
        {
            let cells = [metric.as_str(), value.as_str(), interpretation.unwrap_or("")];
            push_line(&mut output, cells, metric_width, value_width);
        }

        Ok(output)
    }
}

fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells.map(UnicodeWidthStr::width).fold(header.width(), usize::max)
}

fn push_line(output: &mut String, cells: [&str; 3], metric_width: usize, value_width: usize) {
    pad(output, cells[0], metric_width);
    output.push_str(COLUMN_GAP);
    pad(output, cells[1], value_width);
    output.push_str(COLUMN_GAP);
    output.push_str(cells[2]);

    // No trailing padding on rows without an interpretation
    let trimmed = output.trim_end_matches(' ').len();
    output.truncate(trimmed);
    output.push('\n');
}

fn pad(output: &mut String, cell: &str, width: usize) {
    output.push_str(cell);
    output.push_str(&" ".repeat(width.saturating_sub(cell.width())));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::analyze;

    #[test]
    fn test_table_alignment() {
        let stats = analyze("The quick brown fox jumps. The dog sleeps!");
        let out = TableFormatter::new(2).format(&stats).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].starts_with("Metric"));
        assert!(lines[1].starts_with('─'));

        // Values start in the same column on every row
        let value_column = lines[0].find("Value").unwrap();
        let word_count = lines.iter().find(|l| l.starts_with("Word count")).unwrap();
        assert_eq!(&word_count[value_column..], "8");

        let fk = lines
            .iter()
            .find(|l| l.starts_with("Flesch-Kincaid"))
            .unwrap();
        assert!(fk.ends_with("-2.23       Basic"));
    }

    #[test]
    fn test_table_has_no_trailing_spaces() {
        let out = TableFormatter::new(2).format(&analyze("")).unwrap();
        assert!(out.lines().all(|l| !l.ends_with(' ')));
        assert!(out.contains("n/a"));
    }

    #[test]
    fn test_wide_characters_align() {
        let stats = analyze("日本語テキスト abc.");
        let out = TableFormatter::new(2).format(&stats).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        let header_width = lines[0].find("Value").map(|i| lines[0][..i].width()).unwrap();
        let longest = lines.iter().find(|l| l.starts_with("Longest word")).unwrap();
        assert_eq!(longest.width(), header_width + "日本語テキスト".width());
    }
}
