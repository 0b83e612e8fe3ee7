//! The read-only lookup interface the matching engine consumes.

use foodmap_model::{OntologyTerm, TermId};

/// Phrase and hierarchy queries over an ontology snapshot.
///
/// Implementations must be pure with respect to their inputs: the same query
/// against the same snapshot always yields the same answer.
pub trait OntologyLookup {
    /// Finds the term a phrase names.
    ///
    /// With `relax_suffix` set, only suffixed variants of the phrase
    /// (`"<phrase> <suffix>"`) are tried, in suffix order.
    fn lookup(&self, phrase: &str, relax_suffix: bool) -> Option<&OntologyTerm>;

    /// Every chain from `term_id` up to a root, `term_id` first.
    ///
    /// Unknown ids have no chains.
    fn ancestor_chains(&self, term_id: &TermId) -> Vec<Vec<TermId>>;
}
