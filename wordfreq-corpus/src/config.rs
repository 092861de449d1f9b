use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CorpusError, Result};
use crate::report::ReportFormat;

pub const DEFAULT_STOPWORDS_PATH: &str = "stopwords.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "a-results.txt";
pub const DEFAULT_MAX_DEPTH: usize = 1;

/// Directory names never descended into.
pub const DEFAULT_SKIP_DIRS: &[&str] = &[
    "template",
    ".circleci",
    ".github",
    "config-templates",
    "etc",
    "media",
    "scripts",
    "templates",
    ".git",
    ".gitignore",
];

/// File names never read.
pub const DEFAULT_SKIP_FILES: &[&str] = &["LICENSE"];

/// Names excluded from the corpus walk. Matching is by exact file name and
/// both lists are consulted for every entry, whatever its kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkipList {
    pub dirs: Vec<String>,
    pub files: Vec<String>,
}

impl Default for SkipList {
    fn default() -> Self {
        Self {
            dirs: DEFAULT_SKIP_DIRS.iter().map(|s| s.to_string()).collect(),
            files: DEFAULT_SKIP_FILES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SkipList {
    /// A skip list that excludes nothing.
    pub fn empty() -> Self {
        Self {
            dirs: Vec::new(),
            files: Vec::new(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.dirs.iter().chain(self.files.iter()).any(|s| s == name)
    }
}

/// Settings for one word frequency run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Newline-delimited stop word list.
    pub stopwords: PathBuf,
    /// Report destination, overwritten on every run.
    pub output: PathBuf,
    pub format: ReportFormat,
    /// Directory levels below the root the walker may enter.
    pub max_depth: usize,
    /// Optional list of base forms used to validate lemmas.
    pub lexicon: Option<PathBuf>,
    pub skip: SkipList,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            stopwords: PathBuf::from(DEFAULT_STOPWORDS_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            format: ReportFormat::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            lexicon: None,
            skip: SkipList::default(),
        }
    }
}

impl PipelineConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| CorpusError::io(path, e))?;
        serde_json::from_str(&content).map_err(|source| CorpusError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| CorpusError::io(path, e))?;
        Ok(())
    }
}
