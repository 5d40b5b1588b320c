use std::path::PathBuf;

use thiserror::Error;

/// Failure to read a feed. Fatal for the session: no partial index is produced.
#[derive(Error, Debug)]
pub enum FeedLoadError {
    #[error("Feed folder {path:?} is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("Missing feed file {file:?}")]
    MissingFile { file: String },

    #[error("Feed file {file:?} has no {column:?} column")]
    MissingColumn { file: String, column: String },

    #[error("Unable to read feed file {file:?}: {source}")]
    Unreadable {
        file: String,
        #[source]
        source: csv::Error,
    },
}

impl FeedLoadError {
    /// The feed file the error is about, if any.
    pub fn file(&self) -> Option<&str> {
        match self {
            FeedLoadError::NotADirectory { .. } => None,
            FeedLoadError::MissingFile { file }
            | FeedLoadError::MissingColumn { file, .. }
            | FeedLoadError::Unreadable { file, .. } => Some(file.as_str()),
        }
    }
}
