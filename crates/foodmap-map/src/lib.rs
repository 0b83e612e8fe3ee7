#![deny(unsafe_code)]

//! Term matching engine.
//!
//! A label is first matched as a whole ([`matcher`]). When that fails its
//! cleaned tokens are searched for sub-phrases ([`decompose`]), matches that
//! are ancestors of other matches are dropped ([`prune`]) and the remainder
//! becomes the record's outcome ([`assemble`]).

pub mod assemble;
pub mod decompose;
pub mod engine;
pub mod matcher;
pub mod options;
pub mod permute;
pub mod prune;

pub use crate::assemble::{assemble, retain_phrases};
pub use crate::decompose::{CandidateMatch, decompose};
pub use crate::engine::{MappingEngine, MappingStats, Resolution};
pub use crate::matcher::{FullMatchVia, match_full};
pub use crate::options::{DEFAULT_MAX_NGRAM, MAX_NGRAM_LIMIT, MatchOptions};
pub use crate::permute::distinct_permutations;
pub use crate::prune::{ancestor_ids, prune_ancestors};
