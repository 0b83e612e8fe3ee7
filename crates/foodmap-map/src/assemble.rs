//! Turns the surviving component matches into a [`MatchOutcome`].

use std::collections::BTreeSet;

use foodmap_model::{MatchOutcome, OntologyTerm};
use foodmap_ontology::phrase_key;
use tracing::trace;

use crate::decompose::CandidateMatch;

/// Drops repeated terms and terms whose label is part of another's label.
///
/// A label is "part of" another when its words appear as a contiguous,
/// strictly shorter run of the other label's words ("beef" in "ground beef",
/// not "beef" in "beef"). Two different terms sharing one label are both
/// kept. Order is preserved.
pub fn retain_phrases(candidates: Vec<CandidateMatch>) -> Vec<OntologyTerm> {
    let mut seen = BTreeSet::new();
    let terms: Vec<OntologyTerm> = candidates
        .into_iter()
        .map(|candidate| candidate.term)
        .filter(|term| seen.insert(term.id.clone()))
        .collect();
    let words: Vec<Vec<String>> = terms.iter().map(|term| label_words(&term.label)).collect();

    terms
        .into_iter()
        .enumerate()
        .filter(|(idx, term)| {
            let inner = &words[*idx];
            let subsumed = words
                .iter()
                .enumerate()
                .any(|(other, outer)| other != *idx && is_strict_sub_phrase(inner, outer));
            if subsumed {
                trace!(term_id = %term.id, "sub-phrase match dropped");
            }
            !subsumed
        })
        .map(|(_, term)| term)
        .collect()
}

/// Final outcome of a component search.
pub fn assemble(candidates: Vec<CandidateMatch>) -> MatchOutcome {
    MatchOutcome::from_terms(retain_phrases(candidates))
}

fn label_words(label: &str) -> Vec<String> {
    phrase_key(label)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn is_strict_sub_phrase(inner: &[String], outer: &[String]) -> bool {
    !inner.is_empty()
        && inner.len() < outer.len()
        && outer.windows(inner.len()).any(|window| window == inner)
}
