//! Morphological Lemmatizer
//!
//! Reduces inflected English words to their dictionary form in the style
//! of WordNet's *morphy*: irregular forms come from exception tables,
//! regular ones from per-class suffix detachment rules.
//!
//! With a lexicon of known base forms loaded, a detached candidate is only
//! accepted if the lexicon contains it. Without one, orthographic
//! heuristics (consonant undoubling, silent `e` restoration) choose among
//! the candidates.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use super::lexicon;
use super::traits::{Lemmatizer, WordClass};
use crate::error::TextError;

/// (suffix, replacement) detachment rules, in morphy order.
static NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

static VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

static ADJECTIVE_RULES: &[(&str, &str)] = &[
    ("er", ""),
    ("est", ""),
    ("er", "e"),
    ("est", "e"),
];

/// Vowel + consonant endings that take a silent `e` when a consonant
/// precedes them (`creat-` is the exception, handled by the base list).
static SILENT_E_PAIRS: &[&str] = &[
    "ad", "ag", "ak", "am", "ap", "ar", "as", "at", "ib", "id", "il", "in",
    "ir", "is", "od", "ok", "os", "ud", "um", "ur", "ut",
];

/// Endings after which a silent `e` is always restored.
static SILENT_E_ENDINGS: &[&str] = &["dg", "rg", "lg", "eas"];

/// WordNet-style lemmatizer.
#[derive(Debug, Clone, Default)]
pub struct MorphyLemmatizer {
    lexicon: Option<HashSet<String>>,
}

impl MorphyLemmatizer {
    /// Create a lemmatizer that relies on heuristics only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a lemmatizer that validates candidates against `words`.
    pub fn with_lexicon<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lexicon: Some(words.into_iter().map(Into::into).collect()),
        }
    }

    /// Load a lexicon of base forms, one word per line.
    pub fn from_lexicon_file(path: impl AsRef<Path>) -> Result<Self, TextError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| TextError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase);
        let lemmatizer = Self::with_lexicon(words);
        debug!(
            path = %path.display(),
            entries = lemmatizer.lexicon.as_ref().map_or(0, HashSet::len),
            "parsed lemma lexicon"
        );
        Ok(lemmatizer)
    }

    pub fn has_lexicon(&self) -> bool {
        self.lexicon.is_some()
    }

    fn exception(word: &str, class: WordClass) -> Option<&'static str> {
        match class {
            WordClass::Noun => lexicon::irregular_noun(word),
            WordClass::Verb => lexicon::verb_form(word).map(|(lemma, _)| lemma),
            WordClass::Adjective => lexicon::irregular_adjective(word),
            WordClass::Adverb => lexicon::irregular_adverb(word),
        }
    }

    /// Every candidate the detachment rules produce for `word`.
    fn detach(word: &str, class: WordClass) -> Vec<String> {
        let rules = match class {
            WordClass::Noun => NOUN_RULES,
            WordClass::Verb => VERB_RULES,
            WordClass::Adjective => ADJECTIVE_RULES,
            WordClass::Adverb => return Vec::new(),
        };

        let mut candidates = Vec::new();
        for (suffix, replacement) in rules {
            if let Some(stem) = word.strip_suffix(suffix) {
                if stem.is_empty() {
                    continue;
                }
                let candidate = format!("{}{}", stem, replacement);
                if let Some(single) = undouble(stem) {
                    candidates.push(format!("{}{}", single, replacement));
                }
                candidates.push(candidate);
            }
        }
        candidates
    }

    fn lookup(lexicon: &HashSet<String>, word: &str, class: WordClass) -> String {
        if class == WordClass::Noun && lexicon::is_invariant_noun(word) {
            return word.to_string();
        }
        let mut found: Option<String> = lexicon.contains(word).then(|| word.to_string());
        for candidate in Self::detach(word, class) {
            if !lexicon.contains(&candidate) {
                continue;
            }
            let shorter = found
                .as_ref()
                .map_or(true, |best| candidate.len() < best.len());
            if shorter {
                found = Some(candidate);
            }
        }
        found.unwrap_or_else(|| word.to_string())
    }

    fn heuristic(word: &str, class: WordClass) -> String {
        match class {
            WordClass::Noun => noun_base(word),
            WordClass::Verb => verb_base(word),
            WordClass::Adjective => adjective_base(word),
            WordClass::Adverb => word.to_string(),
        }
    }
}

impl Lemmatizer for MorphyLemmatizer {
    fn lemmatize(&self, word: &str, class: WordClass) -> String {
        if let Some(lemma) = Self::exception(word, class) {
            return lemma.to_string();
        }
        if word.len() <= 3 || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return word.to_string();
        }
        match &self.lexicon {
            Some(lexicon) => Self::lookup(lexicon, word, class),
            None => Self::heuristic(word, class),
        }
    }
}

/// Vowel flag for every byte of `s`, computed in a single pass. `u` after
/// `q` is a consonant; `y` is a vowel only when it follows a consonant.
fn vowel_flags(s: &str) -> Vec<bool> {
    let mut flags = Vec::with_capacity(s.len());
    let mut prev: Option<(u8, bool)> = None;
    for b in s.bytes() {
        let vowel = match b {
            b'a' | b'e' | b'i' | b'o' => true,
            b'u' => !matches!(prev, Some((b'q', _))),
            b'y' => matches!(prev, Some((_, false))),
            _ => false,
        };
        flags.push(vowel);
        prev = Some((b, vowel));
    }
    flags
}

fn has_vowel(s: &str) -> bool {
    vowel_flags(s).into_iter().any(|v| v)
}

fn vowel_groups(flags: &[bool]) -> usize {
    let mut groups = 0;
    let mut in_group = false;
    for &vowel in flags {
        if vowel && !in_group {
            groups += 1;
        }
        in_group = vowel;
    }
    groups
}

/// Drop one letter of a final double consonant (`runn` -> `run`).
///
/// `ll`, `ss`, `zz` and `ff` are kept since they usually belong to the
/// base form (`fall`, `pass`, `buzz`, `stuff`).
fn undouble(stem: &str) -> Option<&str> {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    if n < 4 || !stem.is_ascii() {
        return None;
    }
    let last = bytes[n - 1];
    if last != bytes[n - 2] || vowel_flags(stem)[n - 1] || matches!(last, b'l' | b's' | b'z' | b'f') {
        return None;
    }
    Some(&stem[..n - 1])
}

/// Whether a stripped verb or adjective stem lost a silent `e`.
fn needs_silent_e(stem: &str) -> bool {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    if n < 2 {
        return false;
    }
    let last = bytes[n - 1];
    let prev = bytes[n - 2];
    let vowels = vowel_flags(stem);

    match last {
        b'v' | b'u' => return true,
        b'z' => return prev != b'z',
        b'c' => return !stem.ends_with("ync"),
        b's' if prev != b's' && !vowels[n - 2] => return true,
        b'l' if !vowels[n - 2] && !matches!(prev, b'l' | b'r' | b'w') => return true,
        _ => {}
    }
    if SILENT_E_ENDINGS.iter().any(|e| stem.ends_with(e)) {
        return true;
    }
    if n >= 3
        && SILENT_E_PAIRS.iter().any(|p| stem.ends_with(p))
        && !vowels[n - 3]
        && vowels[n - 2]
    {
        return true;
    }

    // Single-syllable consonant-vowel-consonant stems: mak-, hop-, cod-.
    n >= 3
        && !vowels[n - 3]
        && vowels[n - 2]
        && !vowels[n - 1]
        && !matches!(last, b'w' | b'x' | b'y')
        && vowel_groups(&vowels) == 1
}

/// Rebuild a base form from a verb stem whose `-ed`/`-ing` was removed.
fn repair_stem(stem: &str) -> String {
    let with_e = format!("{}e", stem);
    if lexicon::is_base_word(&with_e) {
        return with_e;
    }
    if lexicon::is_base_word(stem) {
        return stem.to_string();
    }
    if let Some(single) = undouble(stem) {
        return single.to_string();
    }
    if needs_silent_e(stem) {
        return with_e;
    }
    stem.to_string()
}

fn noun_base(w: &str) -> String {
    if lexicon::is_invariant_noun(w) || w.ends_with("ss") || w.ends_with("us") || w.ends_with("is") {
        return w.to_string();
    }
    if let Some(stem) = w.strip_suffix("ies") {
        return if w.len() <= 4 {
            format!("{}ie", stem)
        } else {
            format!("{}y", stem)
        };
    }
    for suffix in ["sses", "shes", "ches", "xes", "zzes"] {
        if w.ends_with(suffix) {
            return w[..w.len() - 2].to_string();
        }
    }
    match w.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => w.to_string(),
    }
}

fn verb_base(w: &str) -> String {
    let len = w.len();

    if let Some(stem) = w.strip_suffix("ies") {
        return if len <= 4 {
            format!("{}ie", stem)
        } else {
            format!("{}y", stem)
        };
    }
    if let Some(stem) = w.strip_suffix("ied") {
        return if len <= 4 {
            format!("{}ie", stem)
        } else {
            format!("{}y", stem)
        };
    }
    if w.ends_with("eed") {
        let stem = &w[..len - 1];
        return if lexicon::is_base_word(stem) {
            stem.to_string()
        } else {
            w.to_string()
        };
    }
    if let Some(stem) = w.strip_suffix("ing") {
        if len > 4 && has_vowel(stem) {
            return repair_stem(stem);
        }
        return w.to_string();
    }
    if let Some(stem) = w.strip_suffix("ed") {
        if has_vowel(stem) {
            return repair_stem(stem);
        }
        return w.to_string();
    }
    if let Some(stem) = w.strip_suffix("es") {
        if ["ch", "sh", "ss", "x", "zz", "o"].iter().any(|e| stem.ends_with(e)) {
            return stem.to_string();
        }
        return w[..len - 1].to_string();
    }
    if w.ends_with('s') && !w.ends_with("ss") && !w.ends_with("us") && !w.ends_with("is") {
        return w[..len - 1].to_string();
    }
    w.to_string()
}

fn adjective_base(w: &str) -> String {
    let len = w.len();

    if let Some(stem) = w.strip_suffix("iest").filter(|_| len > 5) {
        return format!("{}y", stem);
    }
    if let Some(stem) = w.strip_suffix("ier").filter(|_| len > 4) {
        return format!("{}y", stem);
    }
    let stem = match w.strip_suffix("est").or_else(|| w.strip_suffix("er")) {
        Some(stem) if stem.len() >= 2 && has_vowel(stem) => stem,
        _ => return w.to_string(),
    };

    let with_e = format!("{}e", stem);
    if lexicon::is_common_adjective(stem) {
        return stem.to_string();
    }
    if lexicon::is_common_adjective(&with_e) {
        return with_e;
    }
    if let Some(single) = undouble(stem) {
        return single.to_string();
    }
    if needs_silent_e(stem) {
        return with_e;
    }
    stem.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemma(word: &str, class: WordClass) -> String {
        MorphyLemmatizer::new().lemmatize(word, class)
    }

    #[test]
    fn test_exceptions() {
        assert_eq!(lemma("ran", WordClass::Verb), "run");
        assert_eq!(lemma("went", WordClass::Verb), "go");
        assert_eq!(lemma("are", WordClass::Verb), "be");
        assert_eq!(lemma("children", WordClass::Noun), "child");
        assert_eq!(lemma("better", WordClass::Adjective), "good");
        assert_eq!(lemma("better", WordClass::Adverb), "well");
    }

    #[test]
    fn test_regular_nouns() {
        assert_eq!(lemma("cats", WordClass::Noun), "cat");
        assert_eq!(lemma("cities", WordClass::Noun), "city");
        assert_eq!(lemma("boxes", WordClass::Noun), "box");
        assert_eq!(lemma("churches", WordClass::Noun), "church");
        assert_eq!(lemma("classes", WordClass::Noun), "class");
        assert_eq!(lemma("houses", WordClass::Noun), "house");
        assert_eq!(lemma("ties", WordClass::Noun), "tie");
    }

    #[test]
    fn test_nouns_that_end_in_s() {
        assert_eq!(lemma("glass", WordClass::Noun), "glass");
        assert_eq!(lemma("status", WordClass::Noun), "status");
        assert_eq!(lemma("analysis", WordClass::Noun), "analysis");
        assert_eq!(lemma("series", WordClass::Noun), "series");
    }

    #[test]
    fn test_regular_verbs() {
        assert_eq!(lemma("running", WordClass::Verb), "run");
        assert_eq!(lemma("walked", WordClass::Verb), "walk");
        assert_eq!(lemma("making", WordClass::Verb), "make");
        assert_eq!(lemma("created", WordClass::Verb), "create");
        assert_eq!(lemma("stopped", WordClass::Verb), "stop");
        assert_eq!(lemma("tried", WordClass::Verb), "try");
        assert_eq!(lemma("watches", WordClass::Verb), "watch");
        assert_eq!(lemma("uses", WordClass::Verb), "use");
        assert_eq!(lemma("falling", WordClass::Verb), "fall");
        assert_eq!(lemma("added", WordClass::Verb), "add");
        assert_eq!(lemma("agreed", WordClass::Verb), "agree");
        assert_eq!(lemma("needed", WordClass::Verb), "need");
    }

    #[test]
    fn test_silent_e_restoration() {
        assert_eq!(lemma("updated", WordClass::Verb), "update");
        assert_eq!(lemma("provided", WordClass::Verb), "provide");
        assert_eq!(lemma("solved", WordClass::Verb), "solve");
        assert_eq!(lemma("required", WordClass::Verb), "require");
        assert_eq!(lemma("parsed", WordClass::Verb), "parse");
        assert_eq!(lemma("handled", WordClass::Verb), "handle");
        assert_eq!(lemma("typed", WordClass::Verb), "type");
        assert_eq!(lemma("opened", WordClass::Verb), "open");
        assert_eq!(lemma("visited", WordClass::Verb), "visit");
        assert_eq!(lemma("eating", WordClass::Verb), "eat");
        assert_eq!(lemma("played", WordClass::Verb), "play");
    }

    #[test]
    fn test_adjectives() {
        assert_eq!(lemma("bigger", WordClass::Adjective), "big");
        assert_eq!(lemma("larger", WordClass::Adjective), "large");
        assert_eq!(lemma("happiest", WordClass::Adjective), "happy");
        assert_eq!(lemma("smaller", WordClass::Adjective), "small");
        assert_eq!(lemma("nicer", WordClass::Adjective), "nice");
        assert_eq!(lemma("wonderful", WordClass::Adjective), "wonderful");
    }

    #[test]
    fn test_adverbs_unchanged_without_exception() {
        assert_eq!(lemma("quickly", WordClass::Adverb), "quickly");
    }

    #[test]
    fn test_short_and_non_ascii_words_untouched() {
        assert_eq!(lemma("bus", WordClass::Noun), "bus");
        assert_eq!(lemma("cafés", WordClass::Noun), "cafés");
    }

    #[test]
    fn test_lexicon_validates_candidates() {
        let lemmatizer = MorphyLemmatizer::with_lexicon(["axe", "ax", "cat", "create", "run"]);
        assert!(lemmatizer.has_lexicon());
        assert_eq!(lemmatizer.lemmatize("cats", WordClass::Noun), "cat");
        assert_eq!(lemmatizer.lemmatize("creating", WordClass::Verb), "create");
        assert_eq!(lemmatizer.lemmatize("running", WordClass::Verb), "run");
        // Shortest lexicon match wins, as in morphy.
        assert_eq!(lemmatizer.lemmatize("axes", WordClass::Noun), "ax");
        // Unknown words come back unchanged.
        assert_eq!(lemmatizer.lemmatize("blorps", WordClass::Noun), "blorps");
    }

    #[test]
    fn test_lexicon_noun_rules() {
        let lemmatizer = MorphyLemmatizer::with_lexicon(["scarf", "box", "fireman", "berry"]);
        assert_eq!(lemmatizer.lemmatize("scarves", WordClass::Noun), "scarf");
        assert_eq!(lemmatizer.lemmatize("boxes", WordClass::Noun), "box");
        assert_eq!(lemmatizer.lemmatize("firemen", WordClass::Noun), "fireman");
        assert_eq!(lemmatizer.lemmatize("berries", WordClass::Noun), "berry");
    }

    #[test]
    fn test_lexicon_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# base forms").unwrap();
        writeln!(file, "Walk").unwrap();
        writeln!(file, "dog").unwrap();

        let lemmatizer = MorphyLemmatizer::from_lexicon_file(file.path()).unwrap();
        assert_eq!(lemmatizer.lemmatize("walked", WordClass::Verb), "walk");
        assert_eq!(lemmatizer.lemmatize("dogs", WordClass::Noun), "dog");
    }

    #[test]
    fn test_vowel_flags() {
        assert_eq!(vowel_flags("yyy"), vec![false, true, false]);
        assert_eq!(vowel_flags("quay"), vec![false, false, true, false]);
        assert_eq!(vowel_groups(&vowel_flags("rhythm")), 1);
    }

    #[test]
    fn test_long_letter_run_does_not_overflow() {
        let run = "y".repeat(400_000);
        let word = format!("{}bebed", run);
        assert_eq!(lemma(&word, WordClass::Verb), format!("{}beb", run));
    }
}
