//! JSON renderer implementation.

use crate::error::Result;
use crate::stats::TextStats;
use serde::Serialize;

use super::options::JsonFormat;
use super::Formatter;

/// Statistics plus the band descriptions, as serialized.
#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    stats: &'a TextStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    interpretation: Option<Interpretation>,
}

#[derive(Serialize)]
struct Interpretation {
    english_level: &'static str,
    gunning_fog: &'static str,
    smog: &'static str,
}

/// Serializes statistics as a JSON object.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    format: JsonFormat,
}

impl JsonFormatter {
    /// Create a formatter with the given indentation style.
    pub fn new(format: JsonFormat) -> Self {
        Self { format }
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, stats: &TextStats) -> Result<String> {
        to_json(stats, self.format)
    }
}

/// Convert statistics to JSON.
pub fn to_json(stats: &TextStats, format: JsonFormat) -> Result<String> {
    let report = Report {
        stats,
        interpretation: stats.readability.map(|r| Interpretation {
            english_level: r.english_level.label(),
            gunning_fog: r.fog_band.description(),
            smog: r.smog_band.description(),
        }),
    };

    let json = match format {
        JsonFormat::Compact => serde_json::to_string(&report)?,
        JsonFormat::Pretty => serde_json::to_string_pretty(&report)?,
    };
    Ok(json)
}
