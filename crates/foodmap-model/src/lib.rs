//! Data model shared by the foodmap crates.

pub mod error;
pub mod ids;
pub mod outcome;
pub mod result;
pub mod term;

pub use error::{ModelError, Result};
pub use ids::{TermId, term_key};
pub use outcome::{MatchOutcome, MatchStage};
pub use result::{MappingResult, MappingValue, OntologyRef};
pub use term::{InputRecord, OntologyTerm};
