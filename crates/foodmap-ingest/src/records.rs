//! Reading input records (`id`, `label`) from delimited files.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use foodmap_model::{InputRecord, TermId};
use tracing::{info, warn};

use crate::error::{IngestError, Result};
use crate::format::InputFormat;

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Reads every input record from a `.csv` or `.tsv` file.
///
/// The first row is a header and is skipped. The first column is the input
/// id, the second its label; further columns are ignored.
pub fn read_input_records(path: &Path) -> Result<Vec<InputRecord>> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let format = InputFormat::from_path(path)?;
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_records(file, format, path)?;
    info!(path = %path.display(), records = records.len(), "input records loaded");
    Ok(records)
}

/// Reads input records from any reader. `path` is only used in errors.
pub fn read_records<R: Read>(
    reader: R,
    format: InputFormat,
    path: &Path,
) -> Result<Vec<InputRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(format.delimiter())
        .from_reader(reader);

    let mut seen = BTreeSet::new();
    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| IngestError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let line = row.position().map_or(0, csv::Position::line);
        let malformed = |reason: &str| IngestError::MalformedRow {
            path: path.to_path_buf(),
            line,
            reason: reason.to_string(),
        };
        if row.len() < 2 {
            return Err(malformed("expected an id and a label column"));
        }
        let id = normalize_cell(row.get(0).unwrap_or_default());
        let id = TermId::new(id).map_err(|_| malformed("empty id"))?;
        let record = InputRecord::new(id, normalize_cell(row.get(1).unwrap_or_default()));

        // Inputs are keyed by `label:id`; the first row wins.
        if !seen.insert(record.key()) {
            warn!(line, input_id = %record.id, "duplicate input row skipped");
            continue;
        }
        records.push(record);
    }
    Ok(records)
}
