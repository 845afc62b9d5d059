//! Vowel-group syllable estimation.
//!
//! This is a heuristic for English words, not a dictionary lookup. The word
//! is lowercased, outer consonants are stripped, vowel clusters are collapsed
//! and the remaining vowel groups are counted.

use regex::Regex;
use std::sync::LazyLock;

/// Words with at least this many syllables are "complex".
pub const COMPLEX_WORD_SYLLABLES: usize = 3;

static VOWEL_GROUP: LazyLock<Regex> = LazyLock::new(|| compile(r"[aeiouy]+"));
static DIPHTHONG: LazyLock<Regex> = LazyLock::new(|| compile(r"[aeiou]{2}"));
static TRIPHTHONG: LazyLock<Regex> = LazyLock::new(|| compile(r"[aeiou]{3}"));
static OUTER_CONSONANTS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[^aeiouy]+|[^aeiouy]+$"));

fn compile(pattern: &str) -> Regex {
    // Patterns are literals; a failure here is a programming error
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid syllable pattern {pattern}: {e}"))
}

/// Estimate the number of syllables in a word.
///
/// # Example
///
/// ```
/// use textstat::syllable::count_syllables;
///
/// assert_eq!(count_syllables("banana"), 3);
/// assert_eq!(count_syllables("queue"), 1);
/// ```
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let word = OUTER_CONSONANTS.replace_all(&word, "");
    let word = TRIPHTHONG.replace_all(&word, "a");
    let word = DIPHTHONG.replace_all(&word, "a");
    VOWEL_GROUP.find_iter(&word).count()
}

/// Whether a syllable estimate marks a complex word.
pub fn is_complex(syllables: usize) -> bool {
    syllables >= COMPLEX_WORD_SYLLABLES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_words() {
        assert_eq!(count_syllables("banana"), 3);
        assert_eq!(count_syllables("queue"), 1);
        assert_eq!(count_syllables("rhythm"), 1);
    }

    #[test]
    fn test_all_consonants_is_zero() {
        assert_eq!(count_syllables("bcd"), 0);
        assert_eq!(count_syllables("----"), 0);
        assert_eq!(count_syllables(""), 0);
    }

    #[test]
    fn test_case_and_punctuation() {
        assert_eq!(count_syllables("BANANA!"), 3);
        assert_eq!(count_syllables("\"Banana,\""), 3);
    }

    #[test]
    fn test_vowel_clusters_collapse() {
        // "beautiful" -> "eautifu" -> "atifu"
        assert_eq!(count_syllables("beautiful"), 3);
        // "read" -> "ea" -> "a"
        assert_eq!(count_syllables("read"), 1);
        // y is not part of a cluster but still a vowel group
        assert_eq!(count_syllables("yes"), 1);
        assert_eq!(count_syllables("happy"), 2);
    }

    #[test]
    fn test_complex_threshold() {
        assert!(!is_complex(2));
        assert!(is_complex(3));
        assert!(is_complex(count_syllables("readability")));
    }
}
