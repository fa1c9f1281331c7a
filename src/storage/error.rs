use std::path::PathBuf;

use thiserror::Error;

use crate::domain::song::SongError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("source {} not found: {source}", .path.display())]
    SourceNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("line {line}: column {column} is not a valid number: {value:?}")]
    MalformedNumericField {
        line: usize,
        column: usize,
        value: String,
    },

    #[error("line {line}: expected column {column}, but the row is too short")]
    MissingColumn { line: usize, column: usize },

    #[error("line {line}: invalid song: {source}")]
    InvalidRecord { line: usize, source: SongError },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
}
