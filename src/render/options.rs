//! Rendering options configuration.

/// Report layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned metric / value / interpretation table
    #[default]
    Table,
    /// One `Metric: value` line per metric
    Lines,
    /// Serialized JSON object
    Json,
}

/// JSON output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Compact single-line JSON
    Compact,
    /// Pretty-printed with 2-space indentation
    #[default]
    Pretty,
}

/// Options for rendering statistics reports.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Report layout
    pub format: OutputFormat,

    /// Decimal places for floating-point metrics (table and lines only)
    pub precision: usize,

    /// JSON indentation style
    pub json_format: JsonFormat,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            precision: 2,
            json_format: JsonFormat::Pretty,
        }
    }
}

impl RenderOptions {
    /// Maximum accepted precision.
    pub const MAX_PRECISION: usize = 10;

    /// Create new render options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the report layout.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set decimal places, clamped to [`Self::MAX_PRECISION`].
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision.min(Self::MAX_PRECISION);
        self
    }

    /// Set JSON indentation style.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = RenderOptions::default();
        assert_eq!(opts.format, OutputFormat::Table);
        assert_eq!(opts.precision, 2);
        assert_eq!(opts.json_format, JsonFormat::Pretty);
    }

    #[test]
    fn test_builder_pattern() {
        let opts = RenderOptions::new()
            .with_format(OutputFormat::Json)
            .with_json_format(JsonFormat::Compact)
            .with_precision(4);

        assert_eq!(opts.format, OutputFormat::Json);
        assert_eq!(opts.json_format, JsonFormat::Compact);
        assert_eq!(opts.precision, 4);
    }

    #[test]
    fn test_precision_clamp() {
        let opts = RenderOptions::new().with_precision(99);
        assert_eq!(opts.precision, RenderOptions::MAX_PRECISION);
    }
}
