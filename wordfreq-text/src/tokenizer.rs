//! English Word Tokenizer
//!
//! Splits text on whitespace and punctuation and detaches clitics
//! (`n't`, `'s`, `'ll`, ...) the way Treebank tokenizers do.

use super::traits::Tokenizer;

/// Clitic suffixes split from their host word, longest first.
static CLITICS: &[&str] = &["n't", "'ll", "'re", "'ve", "'s", "'d", "'m"];

/// Treebank-style English word tokenizer.
#[derive(Debug, Clone, Default)]
pub struct WordTokenizer {
    lowercase: bool,
}

impl WordTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowercase every emitted token.
    pub fn lowercase(mut self, value: bool) -> Self {
        self.lowercase = value;
        self
    }

    fn push_word(&self, word: &str, out: &mut Vec<String>) {
        let word = word.trim_matches('\'');
        if word.is_empty() {
            return;
        }

        let lower = word.to_ascii_lowercase();
        let clitic = CLITICS
            .iter()
            .find(|c| lower.len() > c.len() && lower.ends_with(*c));

        let (host, tail) = match clitic {
            Some(c) => word.split_at(word.len() - c.len()),
            None => (word, ""),
        };

        for part in [host, tail] {
            if part.is_empty() {
                continue;
            }
            if self.lowercase {
                out.push(part.to_lowercase());
            } else {
                out.push(part.to_string());
            }
        }
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for word in text.split(|c: char| !(c.is_alphanumeric() || c == '\'')) {
            self.push_word(word, &mut tokens);
        }
        tokens
    }
}
