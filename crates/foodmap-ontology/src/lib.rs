#![deny(unsafe_code)]

//! Ontology lookup table for the foodmap matching engine.

pub mod error;
pub mod loader;
pub mod lookup;
pub mod ontology;
pub mod paths;
pub mod phrase;

pub use crate::error::OntologyError;
pub use crate::loader::{load_ontology, load_suffixes};
pub use crate::lookup::OntologyLookup;
pub use crate::ontology::{DEFAULT_SUFFIXES, Ontology};
pub use crate::paths::{ONTOLOGY_ENV_VAR, ontology_path};
pub use crate::phrase::phrase_key;
