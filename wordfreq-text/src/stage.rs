//! Tag-guided lemmatization stage.

use super::lemmatizer::MorphyLemmatizer;
use super::tagger::RuleTagger;
use super::tokenizer::WordTokenizer;
use super::traits::{Lemmatizer, Tagger, Tokenizer, WordClass};

/// Tag used when a word yields no tokens at all.
pub const FALLBACK_TAG: &str = "NN";

/// Reduces tokens to lemmas using their part-of-speech tag as a hint.
///
/// Each word is tokenized and tagged on its own, without the sentence it
/// came from, so tags for ambiguous words (`test`, `run`) are a best guess.
pub struct LemmaStage {
    tokenizer: Box<dyn Tokenizer>,
    tagger: Box<dyn Tagger>,
    lemmatizer: Box<dyn Lemmatizer>,
}

impl Default for LemmaStage {
    fn default() -> Self {
        Self::with_lemmatizer(MorphyLemmatizer::new())
    }
}

impl std::fmt::Debug for LemmaStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LemmaStage").finish_non_exhaustive()
    }
}

impl LemmaStage {
    pub fn new(
        tokenizer: impl Tokenizer + 'static,
        tagger: impl Tagger + 'static,
        lemmatizer: impl Lemmatizer + 'static,
    ) -> Self {
        Self {
            tokenizer: Box::new(tokenizer),
            tagger: Box::new(tagger),
            lemmatizer: Box::new(lemmatizer),
        }
    }

    /// Built-in tokenizer and tagger around the given lemmatizer.
    pub fn with_lemmatizer(lemmatizer: impl Lemmatizer + 'static) -> Self {
        Self::new(WordTokenizer::new(), RuleTagger::new(), lemmatizer)
    }

    /// Tag of the first token of `word`.
    pub fn tag_word(&self, word: &str) -> String {
        let tokens = self.tokenizer.tokenize(word);
        self.tagger
            .tag(&tokens)
            .into_iter()
            .next()
            .map(|tagged| tagged.tag)
            .unwrap_or_else(|| FALLBACK_TAG.to_string())
    }

    /// Lemma of a single word, or the word itself when its tag has no
    /// coarse class.
    pub fn lemmatize_word(&self, word: &str) -> String {
        let tag = self.tag_word(word);
        match WordClass::from_tag(&tag) {
            Some(class) => self.lemmatizer.lemmatize(word, class),
            None => word.to_string(),
        }
    }

    /// Lemmatize every non-empty token, preserving order.
    pub fn lemmatize_tokens(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .filter(|token| !token.is_empty())
            .map(|token| self.lemmatize_word(token))
            .collect()
    }
}
