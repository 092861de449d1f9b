//! Stop Word Filtering
//!
//! Exact-match removal of high-frequency function words before
//! lemmatization.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::TextError;

/// Built-in English list for callers that do not load one from a file.
pub static DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an",
    "and", "any", "are", "as", "at", "be", "because", "been", "before",
    "being", "below", "between", "both", "but", "by", "can", "could", "did",
    "do", "does", "doing", "down", "during", "each", "else", "few", "for",
    "from", "further", "had", "has", "have", "he", "her", "here", "hers",
    "him", "his", "how", "i", "if", "in", "into", "is", "it", "its",
    "itself", "just", "me", "more", "most", "must", "my", "no", "nor",
    "not", "now", "of", "off", "on", "once", "only", "or", "other", "our",
    "ours", "out", "over", "own", "same", "she", "should", "so", "some",
    "such", "than", "that", "the", "their", "them", "then", "there",
    "these", "they", "this", "those", "through", "to", "too", "under",
    "until", "up", "very", "was", "we", "were", "what", "when", "where",
    "which", "while", "who", "whom", "why", "will", "with", "would", "you",
    "your",
];

/// Set of words excluded from frequency analysis.
///
/// Membership is exact string equality. Tokens reaching the filter are
/// already lowercased by the normalizer, so no case folding happens here.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// An empty list; nothing is filtered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from in-memory words.
    pub fn from_slice(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// The built-in English list.
    pub fn english() -> Self {
        Self::from_slice(DEFAULT_ENGLISH_STOP_WORDS)
    }

    /// Read a stop word file: one word per line, surrounding blanks trimmed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TextError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| TextError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    /// Parse a newline-delimited list. Blank lines and `#` comments are skipped.
    pub fn parse(content: &str) -> Self {
        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        Self { words }
    }

    /// Insert one more word.
    pub fn add(&mut self, word: impl Into<String>) {
        self.words.insert(word.into());
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Remove every stop word from `tokens`, keeping the order of the rest.
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        if self.words.is_empty() {
            return tokens;
        }
        tokens
            .into_iter()
            .filter(|token| !self.contains(token))
            .collect()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no word would be filtered.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Union `other` into this list.
    pub fn merge(&mut self, other: &StopWords) {
        self.words.extend(other.words.iter().cloned());
    }
}
