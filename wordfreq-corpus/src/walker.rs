//! Corpus Directory Walker
//!
//! Collects the document paths under a corpus root, honouring a skip list
//! and an explicit traversal depth.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::config::{SkipList, DEFAULT_MAX_DEPTH};
use crate::error::{CorpusError, Result};

/// Walks a corpus root and lists the files to read.
///
/// `max_depth` counts the directory levels below the root that may be
/// entered: `0` reads only the root's own files, `1` also reads the files of
/// its immediate subdirectories, and so on. Directories sitting at the limit
/// are not read.
#[derive(Debug, Clone)]
pub struct CorpusWalker {
    root: PathBuf,
    max_depth: usize,
    skip: SkipList,
}

impl CorpusWalker {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            max_depth: DEFAULT_MAX_DEPTH,
            skip: SkipList::default(),
        }
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn skip(mut self, skip: SkipList) -> Self {
        self.skip = skip;
        self
    }

    fn is_skipped(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return false;
        }
        let skipped = entry
            .file_name()
            .to_str()
            .map(|name| self.skip.contains(name))
            .unwrap_or(false);
        if skipped {
            debug!(path = %entry.path().display(), "skipping entry");
        }
        skipped
    }

    /// Every regular file under the root, sorted by path within each
    /// directory. `usize::MAX` as the depth walks the whole tree.
    pub fn files(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(CorpusError::NotADirectory(self.root.clone()));
        }

        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(self.max_depth.saturating_add(1))
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_skipped(entry));

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry?;
            let file_type = entry.file_type();
            if file_type.is_dir() {
                continue;
            }
            // Links are never followed, not even to regular files.
            if file_type.is_file() {
                files.push(entry.into_path());
            } else {
                debug!(path = %entry.path().display(), "ignoring non-file entry");
            }
        }
        Ok(files)
    }
}
