//! English Text Analyzer
//!
//! Runs one line of text through normalization, stop word removal and
//! lemmatization.

use super::normalizer::Normalizer;
use super::stage::LemmaStage;
use super::stop_words::StopWords;

/// Line-level analysis pipeline.
#[derive(Debug, Default)]
pub struct EnglishAnalyzer {
    normalizer: Normalizer,
    stop_words: StopWords,
    stage: LemmaStage,
}

impl EnglishAnalyzer {
    pub fn new(normalizer: Normalizer, stop_words: StopWords, stage: LemmaStage) -> Self {
        Self {
            normalizer,
            stop_words,
            stage,
        }
    }

    /// Normalize, drop stop words, then lemmatize the survivors.
    pub fn analyze(&self, line: &str) -> Vec<String> {
        let tokens = self.normalizer.tokens(line);
        let kept = self.stop_words.filter(tokens);
        self.stage.lemmatize_tokens(&kept)
    }

    pub fn stage(&self) -> &LemmaStage {
        &self.stage
    }
}
