use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a load run.
///
/// Only connection failures used to be special-cased; they are now an
/// ordinary variant the caller has to deal with like every other one.
#[derive(Debug, Error)]
pub enum SqlizeError {
    #[error("failed to open database {path}")]
    Connect {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} does not contain a JSON object at the top level")]
    NotAnObject { path: PathBuf },

    #[error("{0:?} cannot be used as a table or column name")]
    InvalidIdentifier(String),

    #[error("document key {0:?} collides with a fixed column")]
    ReservedColumn(String),

    #[error("post id must be a scalar, found {0}")]
    UnsupportedIdentifier(String),

    #[error("row has {actual} values but the table has {expected} columns")]
    RowLength { expected: usize, actual: usize },

    #[error("failed to write progress")]
    Progress(#[from] std::io::Error),

    #[error(transparent)]
    Database(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, SqlizeError>;
