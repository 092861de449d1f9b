use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
