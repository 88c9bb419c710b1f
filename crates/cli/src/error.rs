//! CLI error types.
//!
//! Every variant is fatal: the binary reports it on stderr and exits non-zero.
//! Query errors are not in here; they are results and go to the output file.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Error reading \"{}\": {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Error writing \"{}\": {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Error loading \"{}\" as query JSON: {source}", .path.display())]
    Query { path: PathBuf, source: FormatError },

    #[error("Error loading \"{}\" as table JSON: {source}", .path.display())]
    Table { path: PathBuf, source: FormatError },
}

/// A file that was read but does not have the expected shape.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("expecting {0}")]
    Shape(&'static str),

    #[error("unknown column type \"{0}\"")]
    UnknownType(String),

    #[error("unknown operator \"{0}\"")]
    UnknownOperator(String),

    #[error("got invalid cell value in row {row}; expecting a string or an integer")]
    InvalidCell { row: usize },

    #[error("{0}")]
    Table(sqleval_core::Error),
}
