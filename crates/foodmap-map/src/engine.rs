//! Mapping engine implementation.

use foodmap_model::{InputRecord, MappingResult, MatchOutcome, MatchStage};
use foodmap_normalize::{NormalizedPhrase, PhraseNormalizer};
use foodmap_ontology::OntologyLookup;
use serde::Serialize;
use tracing::{debug, info};

use crate::assemble::assemble;
use crate::decompose::decompose;
use crate::matcher::{FullMatchVia, match_full};
use crate::options::MatchOptions;
use crate::prune::prune_ancestors;

/// How one label resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub outcome: MatchOutcome,
    pub stage: MatchStage,
    /// Set when the whole label matched.
    pub via: Option<FullMatchVia>,
}

/// Counters for a batch of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MappingStats {
    pub inputs: usize,
    pub full_matches: usize,
    /// Records resolved to one or more sub-phrase terms.
    pub component_matches: usize,
    /// Component matches that produced more than one term.
    pub multi_term: usize,
    pub unmatched: usize,
}

impl MappingStats {
    fn observe(&mut self, resolution: &Resolution) {
        self.inputs += 1;
        match (&resolution.outcome, resolution.stage) {
            (MatchOutcome::NoMatch, _) => self.unmatched += 1,
            (_, MatchStage::Full) => self.full_matches += 1,
            (outcome, MatchStage::Component) => {
                self.component_matches += 1;
                if matches!(outcome, MatchOutcome::Multiple(_)) {
                    self.multi_term += 1;
                }
            }
        }
    }
}

/// Maps free-text labels onto ontology terms.
///
/// The engine borrows a read-only lookup table and normalizer; the
/// [`MappingResult`] it writes into is owned by the caller.
///
/// # Example
///
/// ```ignore
/// let engine = MappingEngine::new(&ontology, &normalizer, MatchOptions::default());
/// let (result, stats) = engine.map_records(&records);
/// ```
pub struct MappingEngine<'a, L: ?Sized, N: ?Sized> {
    lookup: &'a L,
    normalizer: &'a N,
    options: MatchOptions,
}

impl<'a, L, N> MappingEngine<'a, L, N>
where
    L: OntologyLookup + ?Sized,
    N: PhraseNormalizer + ?Sized,
{
    pub fn new(lookup: &'a L, normalizer: &'a N, options: MatchOptions) -> Self {
        Self {
            lookup,
            normalizer,
            options,
        }
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Resolves a raw label. Never fails; a label with no match yields
    /// [`MatchOutcome::NoMatch`].
    pub fn resolve(&self, label: &str) -> Resolution {
        let phrase = self.normalizer.normalize(label);
        self.resolve_phrase(&phrase)
    }

    /// Resolves an already normalized label.
    pub fn resolve_phrase(&self, phrase: &NormalizedPhrase) -> Resolution {
        if let Some((term, via)) = match_full(self.lookup, phrase, &self.options) {
            return Resolution {
                outcome: MatchOutcome::Single(term.clone()),
                stage: MatchStage::Full,
                via: Some(via),
            };
        }

        // Component search over the cleaned tokens.
        let candidates = decompose(self.lookup, &phrase.tokens, &self.options);
        let found = candidates.len();
        let pruned = prune_ancestors(self.lookup, candidates);
        let outcome = assemble(pruned);
        debug!(
            tokens = phrase.tokens.len(),
            candidates = found,
            kept = outcome.terms().len(),
            "component search finished"
        );
        Resolution {
            outcome,
            stage: MatchStage::Component,
            via: None,
        }
    }

    /// Resolves one record and writes it into `result`.
    pub fn map_record(&self, result: &mut MappingResult, record: &InputRecord) -> Resolution {
        let resolution = self.resolve(&record.label);
        debug!(
            input_id = %record.id,
            stage = resolution.stage.as_str(),
            terms = resolution.outcome.terms().len(),
            "record resolved"
        );
        result.record(record, &resolution.outcome);
        resolution
    }

    /// Maps every record in input order.
    pub fn map_records(&self, records: &[InputRecord]) -> (MappingResult, MappingStats) {
        let mut result = MappingResult::new();
        let mut stats = MappingStats::default();
        for record in records {
            let resolution = self.map_record(&mut result, record);
            stats.observe(&resolution);
        }
        info!(
            inputs = stats.inputs,
            full = stats.full_matches,
            component = stats.component_matches,
            unmatched = stats.unmatched,
            "mapping complete"
        );
        (result, stats)
    }
}

#[cfg(test)]
mod tests {
    use foodmap_model::{OntologyTerm, TermId};
    use foodmap_normalize::StandardNormalizer;
    use foodmap_ontology::Ontology;

    use super::*;

    fn id(value: &str) -> TermId {
        TermId::new(value).unwrap()
    }

    fn ontology(terms: &[(&str, &str, &[&str])]) -> Ontology {
        let mut ontology = Ontology::new();
        for (term_id, label, parents) in terms {
            let term =
                OntologyTerm::new(id(term_id), *label, parents.iter().map(|p| id(p)).collect())
                    .unwrap();
            ontology.add_term(term).unwrap();
        }
        ontology
    }

    fn phrase(tokens: &[&str]) -> NormalizedPhrase {
        let tokens: Vec<String> = tokens.iter().map(|t| (*t).to_string()).collect();
        NormalizedPhrase::from_tokens(tokens.join(" "), tokens)
    }

    fn ids(resolution: &Resolution) -> Vec<&str> {
        resolution
            .outcome
            .terms()
            .iter()
            .map(|t| t.id.as_str())
            .collect()
    }

    #[test]
    fn full_match_skips_component_search() {
        let lookup = ontology(&[("GB", "ground beef", &[]), ("BEEF", "beef", &[])]);
        let normalizer = StandardNormalizer::new();
        let engine = MappingEngine::new(&lookup, &normalizer, MatchOptions::default());

        let resolution = engine.resolve("Ground Beef");
        assert_eq!(resolution.stage, MatchStage::Full);
        assert_eq!(resolution.via, Some(FullMatchVia::SampleExact));
        assert_eq!(ids(&resolution), vec!["GB"]);
    }

    #[test]
    fn greedy_longest_first() {
        let lookup = ontology(&[("GB", "ground beef", &[]), ("BEEF", "beef", &[])]);
        let normalizer = StandardNormalizer::new();
        let engine = MappingEngine::new(&lookup, &normalizer, MatchOptions::default());

        let resolution = engine.resolve_phrase(&phrase(&["raw", "ground", "beef"]));
        assert_eq!(resolution.stage, MatchStage::Component);
        assert_eq!(ids(&resolution), vec!["GB"]);
    }

    #[test]
    fn permuted_label_matches() {
        let lookup = ontology(&[("CR", "chicken raw", &[])]);
        let normalizer = StandardNormalizer::new();
        let engine = MappingEngine::new(&lookup, &normalizer, MatchOptions::default());

        let resolution = engine.resolve_phrase(&phrase(&["raw", "chicken"]));
        assert_eq!(ids(&resolution), vec!["CR"]);
    }

    #[test]
    fn ancestors_are_pruned() {
        let lookup = ontology(&[
            ("ANIMAL", "animal", &[]),
            ("MEAT", "meat", &["ANIMAL"]),
            ("BEEF", "beef", &["MEAT"]),
        ]);
        let normalizer = StandardNormalizer::new();
        let engine = MappingEngine::new(&lookup, &normalizer, MatchOptions::default());

        let resolution = engine.resolve_phrase(&phrase(&["beef", "meat"]));
        let beef = lookup.get(&id("BEEF")).unwrap().clone();
        assert_eq!(resolution.outcome, MatchOutcome::Single(beef));
    }

    #[test]
    fn no_match_is_not_an_error() {
        let lookup = ontology(&[("BEEF", "beef", &[])]);
        let normalizer = StandardNormalizer::new();
        let engine = MappingEngine::new(&lookup, &normalizer, MatchOptions::default());

        let resolution = engine.resolve("12 oz. sparkling water");
        assert_eq!(resolution.outcome, MatchOutcome::NoMatch);
        assert_eq!(resolution.stage, MatchStage::Component);
        assert_eq!(engine.resolve("").outcome, MatchOutcome::NoMatch);
    }

    #[test]
    fn stats_count_each_stage() {
        let lookup = ontology(&[
            ("A", "raw chicken", &[]),
            ("B", "ground beef", &[]),
            ("C", "raw", &[]),
        ]);
        let normalizer = StandardNormalizer::new();
        let engine = MappingEngine::new(&lookup, &normalizer, MatchOptions::default());
        let records = vec![
            InputRecord::new(id("1"), "Raw Chicken"),
            InputRecord::new(id("2"), "Ground Beef, Raw"),
            InputRecord::new(id("3"), "Tap water"),
        ];

        let (result, stats) = engine.map_records(&records);
        assert_eq!(
            stats,
            MappingStats {
                inputs: 3,
                full_matches: 1,
                component_matches: 1,
                multi_term: 1,
                unmatched: 1,
            }
        );
        assert_eq!(result.input_count(), 3);
        assert_eq!(result.matched_count(), 2);
    }
}
