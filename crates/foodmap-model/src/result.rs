//! The mapping result document.
//!
//! `MappingResult` is the accumulator the engine writes into, one input record
//! at a time. It serializes to the five top-level maps of the output JSON:
//!
//! ```text
//! mapping_output             "label:ID" -> "label:ID" | ["label:ID", ...] | ""
//! input_to_ontology_mapping  input id   -> ontology id | [ontology id, ...]
//! ontology_to_input_mapping  ontology id -> input id (first claim wins)
//! input_term_label           input id   -> input label
//! ontology_term_label        ontology id -> ontology label
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::TermId;
use crate::outcome::MatchOutcome;
use crate::term::InputRecord;

/// Value of one `mapping_output` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawMappingValue", into = "RawMappingValue")]
pub enum MappingValue {
    /// Registered but not matched; serialized as an empty string.
    #[default]
    Empty,
    Single(String),
    Multiple(Vec<String>),
}

impl MappingValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawMappingValue {
    One(String),
    Many(Vec<String>),
}

impl From<RawMappingValue> for MappingValue {
    fn from(raw: RawMappingValue) -> Self {
        match raw {
            RawMappingValue::One(value) if value.is_empty() => Self::Empty,
            RawMappingValue::One(value) => Self::Single(value),
            RawMappingValue::Many(values) => Self::Multiple(values),
        }
    }
}

impl From<MappingValue> for RawMappingValue {
    fn from(value: MappingValue) -> Self {
        match value {
            MappingValue::Empty => Self::One(String::new()),
            MappingValue::Single(key) => Self::One(key),
            MappingValue::Multiple(keys) => Self::Many(keys),
        }
    }
}

/// Value of one `input_to_ontology_mapping` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OntologyRef {
    One(TermId),
    Many(Vec<TermId>),
}

impl OntologyRef {
    pub fn ids(&self) -> &[TermId] {
        match self {
            Self::One(id) => std::slice::from_ref(id),
            Self::Many(ids) => ids,
        }
    }
}

/// Accumulated mapping of every input record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingResult {
    mapping_output: BTreeMap<String, MappingValue>,
    input_to_ontology_mapping: BTreeMap<TermId, OntologyRef>,
    ontology_to_input_mapping: BTreeMap<TermId, TermId>,
    input_term_label: BTreeMap<TermId, String>,
    ontology_term_label: BTreeMap<TermId, String>,
}

impl MappingResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an input with an empty mapping unless it is already present.
    pub fn register_input(&mut self, record: &InputRecord) {
        self.mapping_output.entry(record.key()).or_default();
    }

    /// Writes the outcome of one input record.
    ///
    /// `ontology_to_input_mapping` keeps the first input that claimed a term.
    pub fn record(&mut self, record: &InputRecord, outcome: &MatchOutcome) {
        self.register_input(record);
        let value = match outcome {
            MatchOutcome::NoMatch => return,
            MatchOutcome::Single(term) => {
                self.input_to_ontology_mapping
                    .insert(record.id.clone(), OntologyRef::One(term.id.clone()));
                MappingValue::Single(term.key())
            }
            MatchOutcome::Multiple(terms) => {
                self.input_to_ontology_mapping.insert(
                    record.id.clone(),
                    OntologyRef::Many(terms.iter().map(|t| t.id.clone()).collect()),
                );
                MappingValue::Multiple(terms.iter().map(|t| t.key()).collect())
            }
        };
        self.mapping_output.insert(record.key(), value);
        self.input_term_label
            .insert(record.id.clone(), record.label.clone());
        for term in outcome.terms() {
            self.ontology_term_label
                .insert(term.id.clone(), term.label.clone());
            self.ontology_to_input_mapping
                .entry(term.id.clone())
                .or_insert_with(|| record.id.clone());
        }
    }

    pub fn mapping_output(&self) -> &BTreeMap<String, MappingValue> {
        &self.mapping_output
    }

    pub fn input_to_ontology_mapping(&self) -> &BTreeMap<TermId, OntologyRef> {
        &self.input_to_ontology_mapping
    }

    pub fn ontology_to_input_mapping(&self) -> &BTreeMap<TermId, TermId> {
        &self.ontology_to_input_mapping
    }

    pub fn input_term_label(&self) -> &BTreeMap<TermId, String> {
        &self.input_term_label
    }

    pub fn ontology_term_label(&self) -> &BTreeMap<TermId, String> {
        &self.ontology_term_label
    }

    /// Number of registered inputs.
    pub fn input_count(&self) -> usize {
        self.mapping_output.len()
    }

    /// Number of registered inputs with a non-empty mapping.
    pub fn matched_count(&self) -> usize {
        self.mapping_output
            .values()
            .filter(|value| !value.is_empty())
            .count()
    }
}
