#![deny(unsafe_code)]

use std::path::PathBuf;

use foodmap_model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum OntologyError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("missing required column {column:?} in {path}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("invalid term on line {line} of {path}: {source}")]
    InvalidTerm {
        path: PathBuf,
        line: u64,
        #[source]
        source: ModelError,
    },

    #[error("duplicate term id {id}")]
    DuplicateId { id: String },

    #[error("synonym {phrase:?} refers to unknown term {id}")]
    UnknownTerm { id: String, phrase: String },

    #[error("unsupported ontology file extension: {path}")]
    UnsupportedFormat { path: PathBuf },
}

impl OntologyError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: &csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            message: source.to_string(),
        }
    }
}
