//! Text statistics computed in a single pass over an in-memory string.

use crate::readability::{self, Counts, Readability};
use crate::syllable;
use crate::tokenize::{self, WordFrequency};
use serde::{Deserialize, Serialize};

/// Descriptive and readability metrics for one input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStats {
    /// Number of whitespace-delimited words
    pub word_count: usize,

    /// Number of non-whitespace characters
    pub letter_count: usize,

    /// Number of `.`, `!` and `?` characters
    pub sentence_count: usize,

    /// Number of blank-line separated paragraphs
    pub paragraph_count: usize,

    /// Mean word length in characters (0 without words)
    pub average_word_length: f64,

    /// Mean words per sentence (0 without sentences)
    pub average_sentence_length: f64,

    /// First word of maximal length
    pub longest_word: String,

    /// Most frequent lowercased word, first-seen on ties
    pub most_common_word: String,

    /// Number of distinct lowercased words
    pub unique_word_count: usize,

    /// Sum of syllable estimates over all words
    pub total_syllables: usize,

    /// Words with three or more syllables
    pub complex_word_count: usize,

    /// Readability scores, absent without words or sentences
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readability: Option<Readability>,

    /// Most frequent words with their counts, when requested
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub top_words: Vec<(String, usize)>,
}

impl TextStats {
    /// Flesch-Kincaid grade, if the text could be scored.
    pub fn flesch_kincaid_grade(&self) -> Option<f64> {
        self.readability.map(|r| r.flesch_kincaid_grade)
    }

    /// Gunning Fog index, if the text could be scored.
    pub fn gunning_fog_index(&self) -> Option<f64> {
        self.readability.map(|r| r.gunning_fog_index)
    }

    /// SMOG grade, if the text could be scored.
    pub fn smog_grade(&self) -> Option<f64> {
        self.readability.map(|r| r.smog_grade)
    }

    /// Whether the text contained no words at all.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

/// Compute statistics for a text.
///
/// # Example
///
/// ```
/// let stats = textstat::analyze("The quick brown fox jumps. The dog sleeps!");
/// assert_eq!(stats.word_count, 8);
/// assert_eq!(stats.sentence_count, 2);
/// assert_eq!(stats.average_sentence_length, 4.0);
/// ```
pub fn analyze(text: &str) -> TextStats {
    analyze_with_top(text, 0)
}

/// Compute statistics and keep the `top` most frequent words.
pub fn analyze_with_top(text: &str, top: usize) -> TextStats {
    let words = tokenize::words(text);

    let mut total_chars = 0;
    let mut total_syllables = 0;
    let mut complex_words = 0;
    for word in &words {
        total_chars += tokenize::char_len(word);
        let syllables = syllable::count_syllables(word);
        total_syllables += syllables;
        if syllable::is_complex(syllables) {
            complex_words += 1;
        }
    }

    let frequency = WordFrequency::from_words(words.iter().copied());
    let most_common_word = frequency
        .most_common()
        .map(|(word, _)| word.to_string())
        .unwrap_or_default();

    let counts = Counts {
        words: words.len(),
        sentences: tokenize::sentence_count(text),
        syllables: total_syllables,
        complex_words,
    };

    let stats = TextStats {
        word_count: counts.words,
        letter_count: tokenize::letter_count(text),
        sentence_count: counts.sentences,
        paragraph_count: tokenize::paragraph_count(text),
        average_word_length: readability::ratio(total_chars, counts.words),
        average_sentence_length: readability::ratio(counts.words, counts.sentences),
        longest_word: tokenize::longest_word(&words).to_string(),
        most_common_word,
        unique_word_count: frequency.unique(),
        total_syllables,
        complex_word_count: complex_words,
        readability: Readability::from_counts(&counts),
        top_words: frequency
            .top(top)
            .into_iter()
            .map(|(word, count)| (word.to_string(), count))
            .collect(),
    };

    tracing::debug!(
        words = stats.word_count,
        sentences = stats.sentence_count,
        syllables = stats.total_syllables,
        scored = stats.readability.is_some(),
        "analyzed text"
    );

    stats
}
