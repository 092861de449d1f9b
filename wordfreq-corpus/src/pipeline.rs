//! Word Frequency Pipeline
//!
//! Walk, analyze, aggregate and report. Every step is sequential and the
//! first I/O failure aborts the run.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use wordfreq_text::{EnglishAnalyzer, LemmaStage, MorphyLemmatizer, Normalizer, StopWords};

use crate::config::PipelineConfig;
use crate::error::{CorpusError, Result};
use crate::frequency::FrequencyTable;
use crate::report::{ReportRow, ReportWriter};
use crate::walker::CorpusWalker;

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub files: usize,
    /// Lemmas counted, i.e. the sum of every reported count.
    pub tokens: usize,
    /// Distinct lemmas, i.e. report rows.
    pub lemmas: usize,
    pub output: PathBuf,
}

#[derive(Debug)]
pub struct Pipeline {
    config: PipelineConfig,
    analyzer: EnglishAnalyzer,
}

impl Pipeline {
    /// Build the pipeline, loading the stop word list and optional lexicon
    /// named by `config` once for the whole run.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        let stop_words = StopWords::from_file(&config.stopwords)?;
        info!(
            path = %config.stopwords.display(),
            count = stop_words.len(),
            "loaded stop words"
        );

        let lemmatizer = match &config.lexicon {
            Some(path) => {
                let lemmatizer = MorphyLemmatizer::from_lexicon_file(path)?;
                info!(path = %path.display(), "loaded lemma lexicon");
                lemmatizer
            }
            None => MorphyLemmatizer::new(),
        };

        let analyzer = EnglishAnalyzer::new(
            Normalizer::new(),
            stop_words,
            LemmaStage::with_lemmatizer(lemmatizer),
        );
        Ok(Self::with_analyzer(config, analyzer))
    }

    /// Use an already built analyzer; `config.stopwords` and
    /// `config.lexicon` are ignored.
    pub fn with_analyzer(config: PipelineConfig, analyzer: EnglishAnalyzer) -> Self {
        Self { config, analyzer }
    }

    pub fn walker(&self, root: impl AsRef<Path>) -> CorpusWalker {
        CorpusWalker::new(root)
            .max_depth(self.config.max_depth)
            .skip(self.config.skip.clone())
    }

    /// Files the run would read, in reading order.
    pub fn files(&self, root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        self.walker(root).files()
    }

    /// Lemma counts for a single document.
    pub fn count_file(&self, path: impl AsRef<Path>) -> Result<FrequencyTable> {
        let path = path.as_ref();
        info!(path = %path.display(), "reading");

        let file = File::open(path).map_err(|e| CorpusError::io(path, e))?;
        let mut table = FrequencyTable::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| CorpusError::io(path, e))?;
            table.extend(self.analyzer.analyze(&line));
        }

        debug!(path = %path.display(), lemmas = table.total(), "counted file");
        Ok(table)
    }

    /// Merged lemma counts for every document under `root`.
    pub fn count_corpus(&self, root: impl AsRef<Path>) -> Result<(FrequencyTable, usize)> {
        let files = self.files(root)?;
        let mut global = FrequencyTable::new();
        for path in &files {
            global.merge(self.count_file(path)?);
        }
        Ok((global, files.len()))
    }

    /// Report rows for `table`, most frequent first.
    pub fn report(&self, table: &FrequencyTable) -> Vec<ReportRow> {
        ReportRow::annotate(table, self.analyzer.stage())
    }

    /// Run end to end and write the report to `config.output`.
    pub fn run(&self, root: impl AsRef<Path>) -> Result<RunSummary> {
        let root = root.as_ref();
        info!(root = %root.display(), "counting...");
        let (table, files) = self.count_corpus(root)?;

        info!(path = %self.config.output.display(), "writing file...");
        let rows = self.report(&table);
        ReportWriter::new(self.config.format).write_to_path(&rows, &self.config.output)?;

        Ok(RunSummary {
            files,
            tokens: table.total(),
            lemmas: rows.len(),
            output: self.config.output.clone(),
        })
    }
}
