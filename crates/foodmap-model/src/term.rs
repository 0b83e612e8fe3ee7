//! Ontology terms and input records.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::ids::{TermId, term_key};

/// A canonical vocabulary entry.
///
/// A term may have several parents, so the hierarchy is a DAG rather than a
/// tree. Identity is the `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OntologyTerm {
    /// Term identifier (e.g. `FOODON_03411161`).
    pub id: TermId,
    /// Display label (e.g. "ground beef").
    pub label: String,
    /// Direct parents, in declaration order.
    #[serde(default)]
    pub parent_ids: Vec<TermId>,
}

impl OntologyTerm {
    pub fn new(id: TermId, label: impl Into<String>, parent_ids: Vec<TermId>) -> Result<Self> {
        let label = label.into().trim().to_string();
        if label.is_empty() {
            return Err(ModelError::EmptyLabel {
                id: id.to_string(),
            });
        }
        Ok(Self {
            id,
            label,
            parent_ids,
        })
    }

    /// Returns the `label:ID` key for this term.
    pub fn key(&self) -> String {
        term_key(&self.label, &self.id)
    }

    pub fn is_root(&self) -> bool {
        self.parent_ids.is_empty()
    }
}

impl PartialEq for OntologyTerm {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for OntologyTerm {}

impl std::hash::Hash for OntologyTerm {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// One row of the input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub id: TermId,
    pub label: String,
}

impl InputRecord {
    pub fn new(id: TermId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into().trim().to_string(),
        }
    }

    /// Returns the `label:ID` key for this record.
    pub fn key(&self) -> String {
        term_key(&self.label, &self.id)
    }
}
