//! Ontology file loaders.
//!
//! An ontology file is a delimited table (`.csv` or `.tsv`) with a header row:
//!
//! ```text
//! id,label,parent_ids,synonyms
//! FOODON_00001,food,,
//! FOODON_00002,meat,FOODON_00001,
//! FOODON_00003,beef,FOODON_00002,cow meat;beef meat
//! ```
//!
//! `parent_ids` and `synonyms` are optional columns holding `;`-separated
//! lists. Terms are added in a first pass and synonyms in a second one, so a
//! label always wins over another term's synonym.

use std::collections::BTreeMap;
use std::path::Path;

use csv::ReaderBuilder;
use foodmap_model::{OntologyTerm, TermId};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::error::OntologyError;
use crate::ontology::Ontology;

const ID_COLUMN: &str = "id";
const LABEL_COLUMN: &str = "label";
const PARENTS_COLUMN: &str = "parent_ids";
const SYNONYMS_COLUMN: &str = "synonyms";

/// Load an ontology from a `.csv` or `.tsv` file.
pub fn load_ontology(path: &Path) -> Result<Ontology, OntologyError> {
    let delimiter = delimiter_for(path)?;
    let bytes = std::fs::read(path).map_err(|e| OntologyError::io(path, e))?;
    let fingerprint = hex::encode(Sha256::digest(&bytes));
    let rows = read_rows(path, &bytes, delimiter)?;

    let mut ontology = Ontology::new()
        .with_fingerprint(fingerprint)
        .with_source(path.display().to_string());

    // First pass: terms
    for row in &rows {
        let id = TermId::new(row.field(ID_COLUMN)).map_err(|source| OntologyError::InvalidTerm {
            path: path.to_path_buf(),
            line: row.line,
            source,
        })?;
        let parent_ids = split_list(row.field(PARENTS_COLUMN))
            .into_iter()
            .map(TermId::new)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| OntologyError::InvalidTerm {
                path: path.to_path_buf(),
                line: row.line,
                source,
            })?;
        let term = OntologyTerm::new(id, row.field(LABEL_COLUMN), parent_ids).map_err(
            |source| OntologyError::InvalidTerm {
                path: path.to_path_buf(),
                line: row.line,
                source,
            },
        )?;
        ontology.add_term(term)?;
    }

    // Second pass: synonyms
    let mut synonym_count = 0usize;
    for row in &rows {
        let synonyms = split_list(row.field(SYNONYMS_COLUMN));
        if synonyms.is_empty() {
            continue;
        }
        let id = TermId::new(row.field(ID_COLUMN)).map_err(|source| OntologyError::InvalidTerm {
            path: path.to_path_buf(),
            line: row.line,
            source,
        })?;
        for synonym in synonyms {
            ontology.add_synonym(&id, &synonym)?;
            synonym_count += 1;
        }
    }

    info!(
        path = %path.display(),
        term_count = ontology.len(),
        phrase_count = ontology.phrase_count(),
        synonym_count,
        "ontology loaded"
    );
    Ok(ontology)
}

/// Load a suffix list: one suffix per line, blank lines and `#` comments
/// ignored.
pub fn load_suffixes(path: &Path) -> Result<Vec<String>, OntologyError> {
    let contents = std::fs::read_to_string(path).map_err(|e| OntologyError::io(path, e))?;
    let suffixes: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();
    debug!(path = %path.display(), count = suffixes.len(), "suffixes loaded");
    Ok(suffixes)
}

fn delimiter_for(path: &Path) -> Result<u8, OntologyError> {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("csv") => Ok(b','),
        Some("tsv") => Ok(b'\t'),
        _ => Err(OntologyError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

struct Row {
    line: u64,
    fields: BTreeMap<String, String>,
}

impl Row {
    fn field(&self, key: &str) -> &str {
        self.fields.get(key).map(String::as_str).unwrap_or_default()
    }
}

fn read_rows(path: &Path, bytes: &[u8], delimiter: u8) -> Result<Vec<Row>, OntologyError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| OntologyError::csv(path, &e))?
        .iter()
        .map(|h| h.trim().trim_matches('\u{feff}').to_ascii_lowercase())
        .collect();
    for required in [ID_COLUMN, LABEL_COLUMN] {
        if !headers.iter().any(|h| h == required) {
            return Err(OntologyError::MissingColumn {
                path: path.to_path_buf(),
                column: required.to_string(),
            });
        }
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| OntologyError::csv(path, &e))?;
        let line = record.position().map_or(0, csv::Position::line);
        let mut fields = BTreeMap::new();
        for (idx, value) in record.iter().enumerate() {
            if let Some(key) = headers.get(idx) {
                fields.insert(key.clone(), value.trim().to_string());
            }
        }
        rows.push(Row { line, fields });
    }
    Ok(rows)
}

/// Parse a semicolon-separated list.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_skips_blanks() {
        assert_eq!(split_list(" a ; ;b;"), vec!["a", "b"]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn delimiter_follows_extension() {
        assert_eq!(delimiter_for(Path::new("x.CSV")).unwrap(), b',');
        assert_eq!(delimiter_for(Path::new("x.tsv")).unwrap(), b'\t');
        assert!(delimiter_for(Path::new("x.owl")).is_err());
    }
}
