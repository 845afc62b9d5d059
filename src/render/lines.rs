//! Line-per-metric renderer.

use crate::error::Result;
use crate::stats::TextStats;

use super::{rows, Formatter};

/// Prints each metric as `Metric: value`, with any interpretation on the
/// following indented line.
#[derive(Debug, Clone, Copy)]
pub struct LinesFormatter {
    precision: usize,
}

impl LinesFormatter {
    /// Create a formatter printing floats with `precision` decimals.
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }
}

impl Formatter for LinesFormatter {
    fn format(&self, stats: &TextStats) -> Result<String> {
        let mut output = String::new();
        for row in rows(stats, self.precision) {
            output.push_str(&row.metric);
            output.push_str(": ");
            output.push_str(&row.value);
            output.push('\n');
            if let Some(interpretation) = row.interpretation {
                output.push_str("  ");
                output.push_str(interpretation);
                output.push('\n');
            }
        }
        Ok(output)
    }
}
