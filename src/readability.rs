//! Readability formulas and their interpretation bands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw counts the readability formulas are computed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    /// Number of words
    pub words: usize,
    /// Number of sentence terminators
    pub sentences: usize,
    /// Total estimated syllables
    pub syllables: usize,
    /// Words with three or more syllables
    pub complex_words: usize,
}

/// Readability scores with their interpretation bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Readability {
    /// Flesch-Kincaid grade level
    pub flesch_kincaid_grade: f64,
    /// Gunning Fog index
    pub gunning_fog_index: f64,
    /// SMOG grade
    pub smog_grade: f64,
    /// English level derived from the Flesch-Kincaid grade
    pub english_level: EnglishLevel,
    /// SMOG band
    pub smog_band: SmogBand,
    /// Gunning Fog band
    pub fog_band: FogBand,
}

impl Readability {
    /// Score a text from its counts.
    ///
    /// Returns `None` when there are no words or no sentences, since every
    /// formula divides by one of them.
    pub fn from_counts(counts: &Counts) -> Option<Self> {
        if counts.words == 0 || counts.sentences == 0 {
            return None;
        }

        let flesch_kincaid_grade = flesch_kincaid_grade(counts);
        let gunning_fog_index = gunning_fog_index(counts);
        let smog_grade = smog_grade(counts);

        Some(Self {
            flesch_kincaid_grade,
            gunning_fog_index,
            smog_grade,
            english_level: EnglishLevel::from_grade(flesch_kincaid_grade),
            smog_band: SmogBand::from_grade(smog_grade),
            fog_band: FogBand::from_index(gunning_fog_index),
        })
    }
}

/// Divide two counts, yielding 0.0 when the denominator is zero.
pub fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// `0.39 * ASL + 11.8 * (syllables / words) - 15.59`
pub fn flesch_kincaid_grade(counts: &Counts) -> f64 {
    let asl = ratio(counts.words, counts.sentences);
    0.39 * asl + 11.8 * ratio(counts.syllables, counts.words) - 15.59
}

/// `0.4 * (ASL + 100 * complex / words)`
pub fn gunning_fog_index(counts: &Counts) -> f64 {
    let asl = ratio(counts.words, counts.sentences);
    0.4 * (asl + 100.0 * ratio(counts.complex_words, counts.words))
}

/// `1.043 * sqrt(complex * 30 / sentences) + 3.1291`
pub fn smog_grade(counts: &Counts) -> f64 {
    let per_thirty = if counts.sentences == 0 {
        0.0
    } else {
        counts.complex_words as f64 * (30.0 / counts.sentences as f64)
    };
    1.043 * per_thirty.sqrt() + 3.1291
}

/// English level from the Flesch-Kincaid grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnglishLevel {
    /// Grade 5 and below
    Basic,
    /// Grades above 5 up to 8
    Intermediate,
    /// Above grade 8
    Advanced,
}

impl EnglishLevel {
    /// Classify a Flesch-Kincaid grade.
    pub fn from_grade(grade: f64) -> Self {
        if grade <= 5.0 {
            EnglishLevel::Basic
        } else if grade <= 8.0 {
            EnglishLevel::Intermediate
        } else {
            EnglishLevel::Advanced
        }
    }

    /// Short label.
    pub fn label(&self) -> &'static str {
        match self {
            EnglishLevel::Basic => "Basic",
            EnglishLevel::Intermediate => "Intermediate",
            EnglishLevel::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for EnglishLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Interpretation band for the SMOG grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmogBand {
    Basic,
    Intermediate,
    UpperIntermediate,
    Advanced,
    VeryAdvanced,
}

impl SmogBand {
    /// Classify a SMOG grade.
    pub fn from_grade(grade: f64) -> Self {
        if grade <= 6.0 {
            SmogBand::Basic
        } else if grade <= 9.0 {
            SmogBand::Intermediate
        } else if grade <= 12.0 {
            SmogBand::UpperIntermediate
        } else if grade <= 16.0 {
            SmogBand::Advanced
        } else {
            SmogBand::VeryAdvanced
        }
    }

    /// Human-readable interpretation of the band.
    pub fn description(&self) -> &'static str {
        match self {
            SmogBand::Basic => "Basic English, easily understood by a wide audience, including children and those with basic reading skills.",
            SmogBand::Intermediate => "Intermediate English, suitable for a general audience, including young adults and the average reader.",
            SmogBand::UpperIntermediate => "Upper Intermediate to Advanced English, suitable for high school students and adults with good reading skills.",
            SmogBand::Advanced => "Advanced English, suitable for college students and readers with strong comprehension skills.",
            SmogBand::VeryAdvanced => "Very Advanced English, suitable for readers with higher education or specialized knowledge.",
        }
    }
}

impl fmt::Display for SmogBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Interpretation band for the Gunning Fog index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FogBand {
    Basic,
    Intermediate,
    UpperIntermediate,
    VeryAdvanced,
}

impl FogBand {
    /// Classify a Gunning Fog index.
    pub fn from_index(index: f64) -> Self {
        if index <= 8.0 {
            FogBand::Basic
        } else if index <= 12.0 {
            FogBand::Intermediate
        } else if index <= 16.0 {
            FogBand::UpperIntermediate
        } else {
            FogBand::VeryAdvanced
        }
    }

    /// Human-readable interpretation of the band.
    pub fn description(&self) -> &'static str {
        match self {
            FogBand::Basic => {
                "Basic English, easily understood by children and those with basic reading skills."
            }
            FogBand::Intermediate => "Intermediate English, suitable for high school students.",
            FogBand::UpperIntermediate => {
                "Upper Intermediate to Advanced English, suitable for college students."
            }
            FogBand::VeryAdvanced => {
                "Very Advanced English, suitable for postgraduate students and professionals."
            }
        }
    }
}

impl fmt::Display for FogBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_formulas() {
        let counts = Counts {
            words: 100,
            sentences: 5,
            syllables: 150,
            complex_words: 10,
        };
        // ASL = 20, syllables/word = 1.5
        assert!(approx(flesch_kincaid_grade(&counts), 0.39 * 20.0 + 11.8 * 1.5 - 15.59));
        assert!(approx(gunning_fog_index(&counts), 0.4 * (20.0 + 10.0)));
        assert!(approx(smog_grade(&counts), 1.043 * 60.0_f64.sqrt() + 3.1291));
    }

    #[test]
    fn test_no_data_without_words_or_sentences() {
        assert!(Readability::from_counts(&Counts::default()).is_none());

        let no_sentences = Counts {
            words: 3,
            syllables: 3,
            ..Default::default()
        };
        assert!(Readability::from_counts(&no_sentences).is_none());
    }

    #[test]
    fn test_ratio_zero_denominator() {
        assert_eq!(ratio(5, 0), 0.0);
        assert_eq!(ratio(6, 4), 1.5);
    }

    #[test]
    fn test_flesch_kincaid_monotonic_in_sentence_length() {
        // Syllables per word held at 1.5 while ASL grows
        let mut previous = f64::NEG_INFINITY;
        for sentences in (1..=20).rev() {
            let counts = Counts {
                words: 120,
                sentences,
                syllables: 180,
                complex_words: 0,
            };
            let grade = flesch_kincaid_grade(&counts);
            assert!(grade >= previous);
            previous = grade;
        }
    }

    #[test]
    fn test_english_level_bands_are_inclusive() {
        assert_eq!(EnglishLevel::from_grade(-3.0), EnglishLevel::Basic);
        assert_eq!(EnglishLevel::from_grade(5.0), EnglishLevel::Basic);
        assert_eq!(EnglishLevel::from_grade(5.01), EnglishLevel::Intermediate);
        assert_eq!(EnglishLevel::from_grade(8.0), EnglishLevel::Intermediate);
        assert_eq!(EnglishLevel::from_grade(8.01), EnglishLevel::Advanced);
    }

    #[test]
    fn test_smog_bands() {
        assert_eq!(SmogBand::from_grade(6.0), SmogBand::Basic);
        assert_eq!(SmogBand::from_grade(9.0), SmogBand::Intermediate);
        assert_eq!(SmogBand::from_grade(12.0), SmogBand::UpperIntermediate);
        assert_eq!(SmogBand::from_grade(16.0), SmogBand::Advanced);
        assert_eq!(SmogBand::from_grade(16.5), SmogBand::VeryAdvanced);
        assert!(SmogBand::Intermediate
            .description()
            .starts_with("Intermediate English, suitable for a general audience"));
    }

    #[test]
    fn test_fog_bands() {
        assert_eq!(FogBand::from_index(8.0), FogBand::Basic);
        assert_eq!(FogBand::from_index(12.0), FogBand::Intermediate);
        assert_eq!(FogBand::from_index(16.0), FogBand::UpperIntermediate);
        assert_eq!(FogBand::from_index(30.0), FogBand::VeryAdvanced);
        assert_eq!(
            FogBand::Intermediate.to_string(),
            "Intermediate English, suitable for high school students."
        );
    }

    #[test]
    fn test_bands_serialize_as_snake_case() {
        let json = serde_json::to_string(&SmogBand::UpperIntermediate).unwrap();
        assert_eq!(json, "\"upper_intermediate\"");
    }
}
