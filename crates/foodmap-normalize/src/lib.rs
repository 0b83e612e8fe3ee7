#![deny(unsafe_code)]

//! Phrase normalization for foodmap.
//!
//! The matching engine never looks at raw labels; it consumes the
//! [`NormalizedPhrase`] a [`PhraseNormalizer`] produces.

pub mod error;
pub mod lexicon;
pub mod normalizer;
pub mod text;

pub use crate::error::NormalizeError;
pub use crate::lexicon::{Lexicon, LexiconKind};
pub use crate::normalizer::{NormalizedPhrase, PhraseNormalizer, StandardNormalizer};
