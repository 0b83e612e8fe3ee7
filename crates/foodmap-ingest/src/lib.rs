#![deny(unsafe_code)]

//! Input ingestion for foodmap.

pub mod error;
pub mod format;
pub mod records;

pub use error::{IngestError, Result};
pub use format::InputFormat;
pub use records::{read_input_records, read_records};
