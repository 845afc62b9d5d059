//! Tokenization and raw counters.
//!
//! A word is any maximal run of non-whitespace characters. Nothing here
//! strips punctuation, so `dog.` and `dog` are distinct tokens.

use std::collections::HashMap;

/// Characters that terminate a sentence.
const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Separator between paragraphs.
const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Split text into whitespace-delimited words.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Count all non-whitespace characters.
pub fn letter_count(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Count sentence terminators (`.`, `!`, `?`) anywhere in the text.
///
/// Abbreviations and decimal points are counted like any other period.
pub fn sentence_count(text: &str) -> usize {
    text.chars()
        .filter(|c| SENTENCE_TERMINATORS.contains(c))
        .count()
}

/// Count paragraphs separated by a blank line.
///
/// Text without a blank line, including the empty string, is one paragraph.
pub fn paragraph_count(text: &str) -> usize {
    text.split(PARAGRAPH_SEPARATOR).count()
}

/// Length of a word in characters.
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// Return the first word whose length strictly exceeds every earlier one.
pub fn longest_word<'a>(words: &[&'a str]) -> &'a str {
    let mut longest = "";
    let mut longest_len = 0;
    for word in words {
        let len = char_len(word);
        if len > longest_len {
            longest = word;
            longest_len = len;
        }
    }
    longest
}

/// Case-insensitive token frequencies, remembering first appearance.
#[derive(Debug, Clone, Default)]
pub struct WordFrequency {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl WordFrequency {
    /// Create an empty frequency table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a token sequence.
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        let mut freq = Self::new();
        for word in words {
            freq.add(word);
        }
        freq
    }

    /// Record one occurrence of a word.
    pub fn add(&mut self, word: &str) {
        let key = word.to_lowercase();
        match self.counts.get_mut(&key) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(key.clone(), 1);
                self.order.push(key);
            }
        }
    }

    /// Occurrences of a word, compared case-insensitively.
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(&word.to_lowercase()).copied().unwrap_or(0)
    }

    /// Number of distinct lowercased tokens.
    pub fn unique(&self) -> usize {
        self.order.len()
    }

    /// The most frequent token. Ties go to the token seen first.
    pub fn most_common(&self) -> Option<(&str, usize)> {
        let mut best: Option<(&str, usize)> = None;
        for word in &self.order {
            let count = self.counts[word];
            if best.is_none_or(|(_, max)| count > max) {
                best = Some((word.as_str(), count));
            }
        }
        best
    }

    /// The `n` most frequent tokens, by count then first appearance.
    pub fn top(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .order
            .iter()
            .map(|w| (w.as_str(), self.counts[w]))
            .collect();
        // Stable sort keeps first-seen order among equal counts
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}
