#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("failed to read lexicon {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("missing required column {column:?} in lexicon {path}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("unknown lexicon kind {kind:?} on line {line} of {path}")]
    UnknownKind {
        path: PathBuf,
        line: u64,
        kind: String,
    },
}
