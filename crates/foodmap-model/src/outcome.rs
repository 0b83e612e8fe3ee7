//! Per-record match outcomes.

use crate::term::OntologyTerm;

/// How an input label resolved against the ontology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Nothing in the label matched.
    NoMatch,
    /// One term explains the whole label.
    Single(OntologyTerm),
    /// Several terms each explain part of the label, in discovery order.
    Multiple(Vec<OntologyTerm>),
}

impl MatchOutcome {
    /// Builds an outcome from the surviving terms of a component search.
    pub fn from_terms(mut terms: Vec<OntologyTerm>) -> Self {
        match terms.len() {
            0 => Self::NoMatch,
            1 => Self::Single(terms.remove(0)),
            _ => Self::Multiple(terms),
        }
    }

    pub fn terms(&self) -> &[OntologyTerm] {
        match self {
            Self::NoMatch => &[],
            Self::Single(term) => std::slice::from_ref(term),
            Self::Multiple(terms) => terms,
        }
    }

    pub fn is_match(&self) -> bool {
        !matches!(self, Self::NoMatch)
    }
}

/// The engine stage that produced an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchStage {
    /// The whole label matched one term.
    Full,
    /// The label was decomposed into sub-phrases (possibly with no match).
    Component,
}

impl MatchStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Component => "component",
        }
    }
}
