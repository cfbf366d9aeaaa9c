use std::path::PathBuf;

use thiserror::Error;

/// Application-level errors (command line layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to read feed '{}': {source}", path.display())]
    ReadFeed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No feeds configured, add [[feeds]] entries to the configuration")]
    NoFeeds,

    #[error(transparent)]
    SerializeError(#[from] serde_json::Error),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
