use std::path::PathBuf;

use thiserror::Error;
use wordfreq_text::TextError;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error(transparent)]
    Text(#[from] TextError),

    #[error("config error in {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("report serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

impl CorpusError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = CorpusError> = std::result::Result<T, E>;
