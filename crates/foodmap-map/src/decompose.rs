//! Component search over the tokens of a cleaned label.
//!
//! Chunks are tried longest first. A chunk whose tokens are all covered by
//! earlier matches is skipped; otherwise each distinct word order of the
//! chunk is looked up (exact, then suffix-relaxed) until one hits.

use std::collections::BTreeSet;

use foodmap_model::OntologyTerm;
use foodmap_ontology::OntologyLookup;
use tracing::trace;

use crate::options::MatchOptions;
use crate::permute::distinct_permutations;

/// A sub-phrase of the label that matched a term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateMatch {
    pub term: OntologyTerm,
    /// Tokens of the chunk that produced the match.
    pub covered_tokens: BTreeSet<String>,
}

/// Finds every component match in discovery order.
pub fn decompose<L>(lookup: &L, tokens: &[String], options: &MatchOptions) -> Vec<CandidateMatch>
where
    L: OntologyLookup + ?Sized,
{
    let mut covered: BTreeSet<String> = BTreeSet::new();
    let mut candidates = Vec::new();

    for size in (1..=options.chunk_limit(tokens.len())).rev() {
        for chunk in tokens.windows(size) {
            if chunk.iter().all(|token| covered.contains(token)) {
                continue;
            }
            let Some(term) = match_chunk(lookup, chunk, options) else {
                continue;
            };
            trace!(term_id = %term.id, size, "component match");
            covered.extend(chunk.iter().cloned());
            candidates.push(CandidateMatch {
                term: term.clone(),
                covered_tokens: chunk.iter().cloned().collect(),
            });
        }
    }
    candidates
}

fn match_chunk<'o, L>(
    lookup: &'o L,
    chunk: &[String],
    options: &MatchOptions,
) -> Option<&'o OntologyTerm>
where
    L: OntologyLookup + ?Sized,
{
    distinct_permutations(chunk).iter().find_map(|order| {
        let phrase = order.join(" ");
        options
            .lookup_modes()
            .iter()
            .find_map(|&relax| lookup.lookup(&phrase, relax))
    })
}
