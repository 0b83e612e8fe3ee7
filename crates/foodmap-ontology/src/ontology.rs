//! In-memory ontology snapshot.
//!
//! Terms are stored by id; every label and synonym is indexed under its
//! [`phrase_key`]. A phrase belongs to the first term that claims it, so a
//! lookup yields at most one term.

use std::collections::{BTreeMap, BTreeSet};

use foodmap_model::{OntologyTerm, TermId};
use tracing::debug;

use crate::error::OntologyError;
use crate::lookup::OntologyLookup;
use crate::phrase::phrase_key;

/// Suffixes tried by suffix-relaxed lookups when none are configured.
pub const DEFAULT_SUFFIXES: &[&str] = &[
    "food product",
    "food source",
    "product",
    "whole",
    "plant",
    "animal",
    "food",
];

#[derive(Debug, Clone)]
pub struct Ontology {
    terms: BTreeMap<TermId, OntologyTerm>,
    phrases: BTreeMap<String, TermId>,
    suffixes: Vec<String>,
    fingerprint: Option<String>,
    source: Option<String>,
}

impl Default for Ontology {
    fn default() -> Self {
        Self::new()
    }
}

impl Ontology {
    /// Create an empty ontology using [`DEFAULT_SUFFIXES`].
    pub fn new() -> Self {
        Self {
            terms: BTreeMap::new(),
            phrases: BTreeMap::new(),
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| (*s).to_string()).collect(),
            fingerprint: None,
            source: None,
        }
    }

    /// Replace the suffix list used by relaxed lookups.
    #[must_use]
    pub fn with_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.suffixes = suffixes
            .into_iter()
            .map(|s| phrase_key(s.as_ref()))
            .filter(|s| !s.is_empty())
            .collect();
        self
    }

    #[must_use]
    pub fn with_fingerprint(mut self, fingerprint: impl Into<String>) -> Self {
        self.fingerprint = Some(fingerprint.into());
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Add a term and index its label.
    pub fn add_term(&mut self, term: OntologyTerm) -> Result<(), OntologyError> {
        if self.terms.contains_key(&term.id) {
            return Err(OntologyError::DuplicateId {
                id: term.id.to_string(),
            });
        }
        self.index_phrase(&term.label, &term.id);
        self.terms.insert(term.id.clone(), term);
        Ok(())
    }

    /// Index an alternative phrase for an existing term.
    pub fn add_synonym(&mut self, id: &TermId, phrase: &str) -> Result<(), OntologyError> {
        if !self.terms.contains_key(id) {
            return Err(OntologyError::UnknownTerm {
                id: id.to_string(),
                phrase: phrase.to_string(),
            });
        }
        self.index_phrase(phrase, id);
        Ok(())
    }

    fn index_phrase(&mut self, phrase: &str, id: &TermId) {
        let key = phrase_key(phrase);
        if key.is_empty() {
            return;
        }
        if let Some(owner) = self.phrases.get(&key) {
            if owner != id {
                debug!(phrase = %key, owner = %owner, ignored = %id, "phrase already claimed");
            }
            return;
        }
        self.phrases.insert(key, id.clone());
    }

    pub fn get(&self, id: &TermId) -> Option<&OntologyTerm> {
        self.terms.get(id)
    }

    pub fn terms(&self) -> impl Iterator<Item = &OntologyTerm> {
        self.terms.values()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// SHA-256 of the file this ontology was loaded from.
    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Terms without parents.
    pub fn roots(&self) -> Vec<&OntologyTerm> {
        self.terms.values().filter(|t| t.is_root()).collect()
    }

    /// Every word appearing in an indexed phrase.
    pub fn vocabulary(&self) -> BTreeSet<String> {
        self.phrases
            .keys()
            .flat_map(|phrase| phrase.split(' '))
            .map(str::to_string)
            .collect()
    }

    fn exact(&self, key: &str) -> Option<&OntologyTerm> {
        self.phrases.get(key).and_then(|id| self.terms.get(id))
    }

    fn walk_up(&self, path: &mut Vec<TermId>, chains: &mut Vec<Vec<TermId>>) {
        let Some(current) = path.last().cloned() else {
            return;
        };
        let parents: Vec<TermId> = self
            .terms
            .get(&current)
            .map(|term| {
                term.parent_ids
                    .iter()
                    .filter(|parent| !path.contains(parent))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        if parents.is_empty() {
            chains.push(path.clone());
            return;
        }
        for parent in parents {
            path.push(parent);
            self.walk_up(path, chains);
            path.pop();
        }
    }
}

impl OntologyLookup for Ontology {
    fn lookup(&self, phrase: &str, relax_suffix: bool) -> Option<&OntologyTerm> {
        let key = phrase_key(phrase);
        if key.is_empty() {
            return None;
        }
        if !relax_suffix {
            return self.exact(&key);
        }
        self.suffixes
            .iter()
            .find_map(|suffix| self.exact(&format!("{key} {suffix}")))
    }

    fn ancestor_chains(&self, term_id: &TermId) -> Vec<Vec<TermId>> {
        let mut chains = Vec::new();
        if self.terms.contains_key(term_id) {
            let mut path = vec![term_id.clone()];
            self.walk_up(&mut path, &mut chains);
        }
        chains
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> TermId {
        TermId::new(value).unwrap()
    }

    fn add(ontology: &mut Ontology, value: &str, label: &str, parents: &[&str]) {
        let term = OntologyTerm::new(id(value), label, parents.iter().map(|p| id(p)).collect())
            .unwrap();
        ontology.add_term(term).unwrap();
    }

    #[test]
    fn exact_lookup_uses_phrase_key() {
        let mut ontology = Ontology::new();
        add(&mut ontology, "B", "Ground Beef", &[]);

        assert_eq!(ontology.lookup("ground beef", false).map(|t| t.id.as_str()), Some("B"));
        assert_eq!(ontology.lookup("GROUND  BEEF", false).map(|t| t.id.as_str()), Some("B"));
        assert!(ontology.lookup("beef", false).is_none());
        assert!(ontology.lookup("", false).is_none());
    }

    #[test]
    fn relaxed_lookup_only_tries_suffixed_forms() {
        let mut ontology = Ontology::new().with_suffixes(["food product", "(whole)"]);
        add(&mut ontology, "A", "apple (whole)", &[]);
        add(&mut ontology, "M", "milk", &[]);

        assert_eq!(ontology.lookup("apple", true).map(|t| t.id.as_str()), Some("A"));
        assert!(ontology.lookup("apple", false).is_none());
        assert!(ontology.lookup("milk", true).is_none());
    }

    #[test]
    fn first_claim_keeps_phrase() {
        let mut ontology = Ontology::new();
        add(&mut ontology, "A", "chips", &[]);
        add(&mut ontology, "B", "Chips", &[]);
        assert_eq!(ontology.lookup("chips", false).map(|t| t.id.as_str()), Some("A"));
        assert_eq!(ontology.phrase_count(), 1);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut ontology = Ontology::new();
        add(&mut ontology, "A", "apple", &[]);
        let again = OntologyTerm::new(id("A"), "other apple", vec![]).unwrap();
        assert!(matches!(
            ontology.add_term(again),
            Err(OntologyError::DuplicateId { .. })
        ));
    }

    #[test]
    fn synonym_requires_known_term() {
        let mut ontology = Ontology::new();
        add(&mut ontology, "A", "aubergine", &[]);
        ontology.add_synonym(&id("A"), "eggplant").unwrap();
        assert_eq!(ontology.lookup("eggplant", false).map(|t| t.id.as_str()), Some("A"));
        assert!(ontology.add_synonym(&id("Z"), "zucchini").is_err());
    }

    #[test]
    fn ancestor_chains_follow_every_parent() {
        let mut ontology = Ontology::new();
        add(&mut ontology, "FOOD", "food", &[]);
        add(&mut ontology, "ANIMAL", "animal product", &["FOOD"]);
        add(&mut ontology, "MEAT", "meat", &["ANIMAL"]);
        add(&mut ontology, "PROTEIN", "protein source", &[]);
        add(&mut ontology, "BEEF", "beef", &["MEAT", "PROTEIN"]);

        let chains = ontology.ancestor_chains(&id("BEEF"));
        assert_eq!(
            chains,
            vec![
                vec![id("BEEF"), id("MEAT"), id("ANIMAL"), id("FOOD")],
                vec![id("BEEF"), id("PROTEIN")],
            ]
        );
        assert_eq!(ontology.ancestor_chains(&id("FOOD")), vec![vec![id("FOOD")]]);
        assert!(ontology.ancestor_chains(&id("NOPE")).is_empty());
    }

    #[test]
    fn ancestor_chains_stop_at_cycles_and_unknown_parents() {
        let mut ontology = Ontology::new();
        add(&mut ontology, "A", "a", &["B"]);
        add(&mut ontology, "B", "b", &["A", "EXTERNAL"]);

        assert_eq!(
            ontology.ancestor_chains(&id("A")),
            vec![vec![id("A"), id("B"), id("EXTERNAL")]]
        );
    }

    #[test]
    fn vocabulary_lists_indexed_words() {
        let mut ontology = Ontology::new();
        add(&mut ontology, "B", "ground beef", &[]);
        add(&mut ontology, "C", "chicken", &[]);
        let words: Vec<String> = ontology.vocabulary().into_iter().collect();
        assert_eq!(words, vec!["beef", "chicken", "ground"]);
    }
}
