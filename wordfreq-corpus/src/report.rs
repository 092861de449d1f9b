//! Frequency Report
//!
//! Turns the aggregated frequency table into annotated rows and writes them
//! either as fixed-width text or as JSON.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use wordfreq_text::LemmaStage;

use crate::error::{CorpusError, Result};
use crate::frequency::FrequencyTable;

pub const WORD_WIDTH: usize = 15;
pub const TAG_WIDTH: usize = 5;
pub const COUNT_WIDTH: usize = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ReportFormat {
    /// Fixed-width columns, one lemma per line.
    #[default]
    Text,
    /// A JSON array of rows.
    Json,
}

/// One line of the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub lemma: String,
    pub tag: String,
    pub count: usize,
}

impl ReportRow {
    /// Rows for every lemma in `table`, most frequent first, each re-tagged
    /// through `stage`.
    pub fn annotate(table: &FrequencyTable, stage: &LemmaStage) -> Vec<ReportRow> {
        table
            .most_common()
            .into_iter()
            .map(|(lemma, count)| ReportRow {
                lemma: lemma.to_string(),
                tag: stage.tag_word(lemma),
                count,
            })
            .collect()
    }

    /// Word and tag left-justified, count right-justified. Values wider than
    /// their column are written in full.
    pub fn to_line(&self) -> String {
        format!(
            "{:<word$}{:<tag$}{:>count$}",
            self.lemma,
            self.tag,
            self.count,
            word = WORD_WIDTH,
            tag = TAG_WIDTH,
            count = COUNT_WIDTH,
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportWriter {
    format: ReportFormat,
}

impl ReportWriter {
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    pub fn write<W: Write>(&self, rows: &[ReportRow], mut out: W) -> io::Result<()> {
        match self.format {
            ReportFormat::Text => {
                for row in rows {
                    writeln!(out, "{}", row.to_line())?;
                }
            }
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut out, rows)?;
                writeln!(out)?;
            }
        }
        out.flush()
    }

    /// Write the report to `path`, replacing any existing file.
    pub fn write_to_path(&self, rows: &[ReportRow], path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| CorpusError::io(path, e))?;
        self.write(rows, BufWriter::new(file))
            .map_err(|e| CorpusError::io(path, e))
    }
}
