//! English Line Normalizer
//!
//! Canonicalizes contractions and strips punctuation from a raw line of
//! text before it is split into tokens.

use regex::Regex;
use std::sync::LazyLock;

/// One substitution step: a compiled pattern and its replacement template.
#[derive(Debug, Clone)]
pub struct Substitution {
    pattern: Regex,
    replacement: &'static str,
}

impl Substitution {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern)
                .unwrap_or_else(|e| panic!("invalid normalizer pattern '{}': {}", pattern, e)),
            replacement,
        }
    }

    /// Apply this substitution to every match in `text`.
    pub fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, self.replacement).into_owned()
    }
}

// Anything that is not a letter, a blank or an apostrophe.
static NON_LETTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-zA-Z ']+").unwrap_or_else(|e| panic!("invalid letter pattern: {}", e))
});

// The regex crate has no look-behind, so "preceded by X" is written as a
// captured X that the replacement puts back.
static CONTRACTIONS: LazyLock<Vec<Substitution>> = LazyLock::new(|| {
    vec![
        Substitution::new(r"(?i)(it|he|she|that|this|there|here)'s", "${1} is"),
        Substitution::new(r"([a-zA-Z])'s", "${1}"),
        Substitution::new(r"(s)'s?", "${1}"),
        Substitution::new(r"([a-zA-Z])n't", "${1} not"),
        Substitution::new(r"([a-zA-Z])'d", "${1} would"),
        Substitution::new(r"([a-zA-Z])'ll", "${1} will"),
        Substitution::new(r"([Ii])'m", "${1} am"),
        Substitution::new(r"([a-zA-Z])'re", "${1} are"),
        Substitution::new(r"([a-zA-Z])'ve", "${1} have"),
    ]
});

/// Ordered contraction expansion and punctuation stripping.
///
/// The substitution order is significant: every contraction pattern runs
/// before leftover apostrophes are blanked, otherwise `don't` would become
/// `don t` instead of `do not`.
#[derive(Debug, Clone)]
pub struct Normalizer {
    substitutions: &'static [Substitution],
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Create a normalizer over the English contraction table.
    pub fn new() -> Self {
        Self {
            substitutions: CONTRACTIONS.as_slice(),
        }
    }

    /// Normalize a single line of raw text.
    pub fn normalize(&self, line: &str) -> String {
        let stripped = NON_LETTER.replace_all(line, " ");
        let mut text = stripped.trim().to_lowercase();
        for substitution in self.substitutions {
            text = substitution.apply(&text);
        }
        text.replace('\'', " ")
    }

    /// Normalize a line and split it into whitespace-separated tokens.
    pub fn tokens(&self, line: &str) -> Vec<String> {
        self.normalize(line)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contractions_and_punctuation() {
        let normalizer = Normalizer::new();
        assert_eq!(
            normalizer.tokens("It's a test; don't!"),
            vec!["it", "is", "a", "test", "do", "not"]
        );
    }

    #[test]
    fn test_expansions() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize("I'm sure"), "i am sure");
        assert_eq!(normalizer.normalize("we'll see"), "we will see");
        assert_eq!(normalizer.normalize("they'd go"), "they would go");
        assert_eq!(normalizer.normalize("you're here"), "you are here");
        assert_eq!(normalizer.normalize("we've won"), "we have won");
        assert_eq!(normalizer.normalize("She's gone"), "she is gone");
    }

    #[test]
    fn test_possessives_dropped() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize("the cat's toy"), "the cat toy");
        assert_eq!(normalizer.normalize("the cats' toys"), "the cats toys");
    }

    #[test]
    fn test_leftover_apostrophes_blanked() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.tokens("'quoted' o'clock"), vec!["quoted", "o", "clock"]);
    }

    #[test]
    fn test_digits_and_symbols_removed() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.tokens("v2.0 -- 100% done"), vec!["v", "done"]);
        assert!(normalizer.tokens("1234 !!! ???").is_empty());
        assert!(normalizer.tokens("").is_empty());
    }
}
