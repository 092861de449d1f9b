use std::collections::HashMap;

/// Lemma occurrence counts accumulated over a corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lemmas<I, S>(lemmas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        table.extend(lemmas);
        table
    }

    pub fn add(&mut self, lemma: impl Into<String>) {
        *self.counts.entry(lemma.into()).or_insert(0) += 1;
    }

    pub fn extend<I, S>(&mut self, lemmas: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for lemma in lemmas {
            self.add(lemma);
        }
    }

    /// Fold another table's counts into this one.
    pub fn merge(&mut self, other: FrequencyTable) {
        for (lemma, count) in other.counts {
            *self.counts.entry(lemma).or_insert(0) += count;
        }
    }

    pub fn get(&self, lemma: &str) -> usize {
        self.counts.get(lemma).copied().unwrap_or(0)
    }

    /// Number of distinct lemmas.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Lemmas ordered by descending count; equal counts are ordered by lemma.
    pub fn most_common(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(lemma, count)| (lemma.as_str(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}
