//! Rule-based Part-of-Speech Tagger
//!
//! Assigns Penn Treebank tags from a closed-class lexicon, irregular
//! inflection tables and suffix rules.

use super::lexicon;
use super::traits::{TaggedToken, Tagger};

/// Suffixes that mark an adjective.
static ADJECTIVE_SUFFIXES: &[&str] = &[
    "able", "ible", "ous", "ful", "ive", "less", "ish", "ical", "ary",
];

/// Suffixes that mark a noun.
static NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ship", "ism", "ist", "ance",
    "ence", "hood", "dom",
];

static VERB_SUFFIXES: &[&str] = &["ize", "ise", "ify"];

/// Lexicon and suffix driven tagger.
///
/// Every token is tagged on its own; the only contextual rule promotes a
/// word after a modal or `to` to a base-form verb.
#[derive(Debug, Clone, Default)]
pub struct RuleTagger;

impl RuleTagger {
    pub fn new() -> Self {
        Self
    }

    /// Tag a single word with no surrounding context.
    pub fn tag_word(&self, word: &str) -> &'static str {
        let lower = word.to_lowercase();
        let w = lower.as_str();

        if w.is_empty() {
            return "NN";
        }
        if w.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
            return "CD";
        }
        if w.chars().all(|c| !c.is_alphanumeric()) {
            return "SYM";
        }
        if let Some(tag) = lexicon::closed_class_tag(w) {
            return tag;
        }
        if let Some((_, tag)) = lexicon::verb_form(w) {
            return tag;
        }
        if lexicon::irregular_noun(w).is_some() {
            return "NNS";
        }
        if lexicon::is_invariant_noun(w) {
            return "NN";
        }
        if lexicon::is_common_adjective(w) {
            return "JJ";
        }
        Self::tag_by_suffix(w)
    }

    fn tag_by_suffix(w: &str) -> &'static str {
        let len = w.len();

        if let Some(stem) = w.strip_suffix("ing") {
            if len > 4 && has_vowel(stem) {
                return "VBG";
            }
        }
        if let Some(stem) = w.strip_suffix("ed") {
            if len > 3 && has_vowel(stem) {
                return "VBD";
            }
        }
        if len > 4 && w.ends_with("ly") {
            return "RB";
        }
        if let Some(tag) = Self::comparison_tag(w) {
            return tag;
        }
        if len > 5 && ADJECTIVE_SUFFIXES.iter().any(|s| w.ends_with(s)) {
            return "JJ";
        }
        if len > 4 && NOUN_SUFFIXES.iter().any(|s| w.ends_with(s)) {
            return "NN";
        }
        if len > 4 && VERB_SUFFIXES.iter().any(|s| w.ends_with(s)) {
            return "VB";
        }
        if len > 3
            && w.ends_with('s')
            && !w.ends_with("ss")
            && !w.ends_with("us")
            && !w.ends_with("is")
        {
            return "NNS";
        }
        "NN"
    }

    /// `JJR`/`JJS` for comparatives and superlatives of known adjectives.
    fn comparison_tag(w: &str) -> Option<&'static str> {
        let (stem, tag) = if let Some(stem) = w.strip_suffix("est") {
            (stem, "JJS")
        } else if let Some(stem) = w.strip_suffix("er") {
            (stem, "JJR")
        } else {
            return None;
        };

        if stem.len() < 2 {
            return None;
        }

        let mut candidates = vec![stem.to_string(), format!("{}e", stem)];
        if let Some(s) = stem.strip_suffix('i') {
            candidates.push(format!("{}y", s));
        }
        let mut tail = stem.chars().rev();
        if let (Some(last), Some(prev)) = (tail.next(), tail.next()) {
            if last == prev {
                candidates.push(stem[..stem.len() - last.len_utf8()].to_string());
            }
        }

        candidates
            .iter()
            .any(|c| lexicon::is_common_adjective(c))
            .then_some(tag)
    }
}

fn has_vowel(s: &str) -> bool {
    s.chars().any(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y'))
}

impl Tagger for RuleTagger {
    fn tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
        let mut tagged: Vec<TaggedToken> = Vec::with_capacity(tokens.len());
        for token in tokens {
            let mut tag = self.tag_word(token);
            let after_infinitive_marker = tagged
                .last()
                .map(|prev| prev.tag == "MD" || prev.tag == "TO")
                .unwrap_or(false);
            if after_infinitive_marker
                && matches!(tag, "NN" | "VBP")
                && lexicon::closed_class_tag(&token.to_lowercase()).is_none()
            {
                tag = "VB";
            }
            tagged.push(TaggedToken::new(token.clone(), tag));
        }
        tagged
    }
}
