//! Drops component matches that are ancestors of other component matches.

use std::collections::BTreeSet;

use foodmap_model::TermId;
use foodmap_ontology::OntologyLookup;
use tracing::debug;

use crate::decompose::CandidateMatch;

/// Ids above any candidate in the hierarchy, across every parent path.
pub fn ancestor_ids<L>(lookup: &L, candidates: &[CandidateMatch]) -> BTreeSet<TermId>
where
    L: OntologyLookup + ?Sized,
{
    candidates
        .iter()
        .flat_map(|candidate| lookup.ancestor_chains(&candidate.term.id))
        .flat_map(|chain| chain.into_iter().skip(1))
        .collect()
}

/// Keeps the most specific candidates, in their original order.
pub fn prune_ancestors<L>(lookup: &L, candidates: Vec<CandidateMatch>) -> Vec<CandidateMatch>
where
    L: OntologyLookup + ?Sized,
{
    let ancestors = ancestor_ids(lookup, &candidates);
    let (kept, dropped): (Vec<_>, Vec<_>) = candidates
        .into_iter()
        .partition(|candidate| !ancestors.contains(&candidate.term.id));
    if !dropped.is_empty() {
        let ids: Vec<&str> = dropped.iter().map(|c| c.term.id.as_str()).collect();
        debug!(pruned = ?ids, "ancestor matches pruned");
    }
    kept
}
