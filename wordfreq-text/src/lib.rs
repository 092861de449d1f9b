//! English text analysis for word frequency reports.
//!
//! Provides line normalization, stop word filtering and tag-guided
//! lemmatization. The tokenizer, tagger and lemmatizer are traits so that
//! the rule-based implementations shipped here can be swapped out.

mod analyzer;
mod error;
mod lemmatizer;
pub mod lexicon;
mod normalizer;
mod stage;
mod stop_words;
mod tagger;
mod tokenizer;
mod traits;

pub use analyzer::EnglishAnalyzer;
pub use error::TextError;
pub use lemmatizer::MorphyLemmatizer;
pub use normalizer::{Normalizer, Substitution};
pub use stage::{LemmaStage, FALLBACK_TAG};
pub use stop_words::{StopWords, DEFAULT_ENGLISH_STOP_WORDS};
pub use tagger::RuleTagger;
pub use tokenizer::WordTokenizer;
pub use traits::{Lemmatizer, TaggedToken, Tagger, Tokenizer, WordClass};
