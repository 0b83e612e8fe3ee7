use std::collections::BTreeSet;

use foodmap_map::{MappingEngine, MatchOptions, decompose, distinct_permutations};
use foodmap_model::{InputRecord, OntologyTerm, TermId};
use foodmap_normalize::StandardNormalizer;
use foodmap_ontology::Ontology;
use proptest::prelude::*;

const WORDS: &[&str] = &["raw", "ground", "beef", "chicken", "apple", "pie"];

fn ontology() -> Ontology {
    let mut ontology = Ontology::new();
    let terms = [
        ("T1", "beef"),
        ("T2", "ground beef"),
        ("T3", "chicken raw"),
        ("T4", "apple pie"),
        ("T5", "apple"),
        ("T6", "raw"),
    ];
    for (term_id, label) in terms {
        let term = OntologyTerm::new(TermId::new(term_id).unwrap(), label, Vec::new()).unwrap();
        ontology.add_term(term).unwrap();
    }
    ontology
}

fn arb_tokens(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(WORDS), 0..max)
        .prop_map(|words| words.into_iter().map(str::to_string).collect())
}

proptest! {
    #[test]
    fn permutations_are_distinct_reorderings(tokens in arb_tokens(5)) {
        let perms = distinct_permutations(&tokens);
        prop_assert_eq!(&perms[0], &tokens);

        let unique: BTreeSet<&Vec<String>> = perms.iter().collect();
        prop_assert_eq!(unique.len(), perms.len());

        let mut expected = tokens.clone();
        expected.sort();
        for perm in &perms {
            let mut sorted = perm.clone();
            sorted.sort();
            prop_assert_eq!(&sorted, &expected);
        }
    }

    #[test]
    fn every_candidate_claims_a_new_token(tokens in arb_tokens(8)) {
        let lookup = ontology();
        let candidates = decompose(&lookup, &tokens, &MatchOptions::default());
        let distinct: BTreeSet<&String> = tokens.iter().collect();
        prop_assert!(candidates.len() <= distinct.len());

        let mut covered = BTreeSet::new();
        for candidate in &candidates {
            prop_assert!(candidate.covered_tokens.iter().all(|t| distinct.contains(t)));
            prop_assert!(candidate.covered_tokens.iter().any(|t| !covered.contains(t)));
            covered.extend(candidate.covered_tokens.iter().cloned());
        }
    }

    #[test]
    fn mapping_is_deterministic(labels in prop::collection::vec(arb_tokens(6), 1..6)) {
        let lookup = ontology();
        let normalizer = StandardNormalizer::new();
        let engine = MappingEngine::new(&lookup, &normalizer, MatchOptions::default());
        let records: Vec<InputRecord> = labels
            .iter()
            .enumerate()
            .map(|(idx, words)| {
                InputRecord::new(TermId::new(format!("in{idx}")).unwrap(), words.join(" "))
            })
            .collect();

        let (first, first_stats) = engine.map_records(&records);
        let (second, second_stats) = engine.map_records(&records);
        prop_assert_eq!(first_stats, second_stats);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
