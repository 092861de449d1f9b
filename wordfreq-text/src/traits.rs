//! Analyzer Traits
//!
//! Common interfaces for the tokenizer, tagger and lemmatizer stages.

use serde::{Deserialize, Serialize};

/// Coarse part-of-speech category used to guide lemmatization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordClass {
    Adjective,
    Verb,
    Noun,
    Adverb,
}

impl WordClass {
    /// Map a Penn Treebank tag to a coarse class by its first letter.
    ///
    /// Tags outside the four open classes (determiners, pronouns,
    /// prepositions, numbers, ...) have no mapping.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.chars().next()? {
            'J' => Some(WordClass::Adjective),
            'V' => Some(WordClass::Verb),
            'N' => Some(WordClass::Noun),
            'R' => Some(WordClass::Adverb),
            _ => None,
        }
    }
}

/// A token paired with its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub word: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }

    /// Coarse class of this token's tag, if it has one.
    pub fn class(&self) -> Option<WordClass> {
        WordClass::from_tag(&self.tag)
    }
}

/// Splits text into word tokens.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Assigns a part-of-speech tag to every token of a sequence.
pub trait Tagger: Send + Sync {
    fn tag(&self, tokens: &[String]) -> Vec<TaggedToken>;
}

/// Reduces a word to its dictionary form.
pub trait Lemmatizer: Send + Sync {
    /// Return the lemma of `word` read as a member of `class`.
    fn lemmatize(&self, word: &str, class: WordClass) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_mapping() {
        assert_eq!(WordClass::from_tag("JJR"), Some(WordClass::Adjective));
        assert_eq!(WordClass::from_tag("VBG"), Some(WordClass::Verb));
        assert_eq!(WordClass::from_tag("NNS"), Some(WordClass::Noun));
        assert_eq!(WordClass::from_tag("RB"), Some(WordClass::Adverb));
        assert_eq!(WordClass::from_tag("DT"), None);
        assert_eq!(WordClass::from_tag("PRP"), None);
        assert_eq!(WordClass::from_tag(""), None);
    }

    #[test]
    fn test_tagged_token_class() {
        assert_eq!(TaggedToken::new("cats", "NNS").class(), Some(WordClass::Noun));
        assert_eq!(TaggedToken::new("the", "DT").class(), None);
    }
}
