//! Corpus-level word frequency counting.
//!
//! Walks a directory of documents, runs each line through the
//! [`wordfreq_text`] analyzer, merges the per-file counts and writes a
//! report sorted by descending frequency.

pub mod config;
pub mod error;
pub mod frequency;
pub mod pipeline;
pub mod report;
pub mod walker;

pub use config::{PipelineConfig, SkipList};
pub use error::{CorpusError, Result};
pub use frequency::FrequencyTable;
pub use pipeline::{Pipeline, RunSummary};
pub use report::{ReportFormat, ReportRow, ReportWriter};
pub use walker::CorpusWalker;
