//! Whole-label matching.

use foodmap_model::OntologyTerm;
use foodmap_normalize::NormalizedPhrase;
use foodmap_ontology::OntologyLookup;
use tracing::trace;

use crate::options::MatchOptions;

/// Which form of the label produced a full match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullMatchVia {
    SampleExact,
    CleanedExact,
    SampleRelaxed,
    CleanedRelaxed,
}

impl FullMatchVia {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SampleExact => "sample_exact",
            Self::CleanedExact => "cleaned_exact",
            Self::SampleRelaxed => "sample_relaxed",
            Self::CleanedRelaxed => "cleaned_relaxed",
        }
    }
}

/// Tries to map the whole label to a single term.
///
/// Order: `sample` exact, `cleaned_sample` exact, then the same two with
/// suffix relaxation. The first hit wins.
pub fn match_full<'o, L>(
    lookup: &'o L,
    phrase: &NormalizedPhrase,
    options: &MatchOptions,
) -> Option<(&'o OntologyTerm, FullMatchVia)>
where
    L: OntologyLookup + ?Sized,
{
    let attempts = [
        (phrase.sample.as_str(), false, FullMatchVia::SampleExact),
        (phrase.cleaned_sample.as_str(), false, FullMatchVia::CleanedExact),
        (phrase.sample.as_str(), true, FullMatchVia::SampleRelaxed),
        (phrase.cleaned_sample.as_str(), true, FullMatchVia::CleanedRelaxed),
    ];
    for (text, relax, via) in attempts {
        if text.is_empty() || (relax && !options.relax_suffixes) {
            continue;
        }
        if let Some(term) = lookup.lookup(text, relax) {
            trace!(term_id = %term.id, via = via.as_str(), "full match");
            return Some((term, via));
        }
    }
    None
}
