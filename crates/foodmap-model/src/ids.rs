#![deny(unsafe_code)]

use std::fmt;

use crate::ModelError;

/// Identifier of an ontology term or an input row.
///
/// Ids are trimmed on construction and otherwise kept as written, so
/// `foodon_0001` and `FOODON_0001` are different ids.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct TermId(String);

impl TermId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidTermId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TermId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TermId> for String {
    fn from(value: TermId) -> Self {
        value.0
    }
}

impl AsRef<str> for TermId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Renders the `label:ID` key used in `mapping_output`.
pub fn term_key(label: &str, id: &TermId) -> String {
    format!("{label}:{id}")
}
