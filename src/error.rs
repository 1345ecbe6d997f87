use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Ignore pattern error: {0}")]
    Pattern(String),
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}
impl DigestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DigestError::Io {
            path: path.into(),
            source,
        }
    }
}
