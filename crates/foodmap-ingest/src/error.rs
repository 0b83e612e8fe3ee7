use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported input format for {path} (expected .csv or .tsv)")]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to parse {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("malformed row at {path}:{line}: {reason}")]
    MalformedRow {
        path: PathBuf,
        line: u64,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
