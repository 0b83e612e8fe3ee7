use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid term id: {0:?}")]
    InvalidTermId(String),
    #[error("invalid term label for {id}: label must not be empty")]
    EmptyLabel { id: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
