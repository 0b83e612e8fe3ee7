use std::path::PathBuf;
use std::time::Duration;

use foodmap_map::{MappingStats, MatchOptions};

/// What a `map` run did, for the summary table.
#[derive(Debug)]
pub struct MapRunSummary {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub ontology_source: Option<String>,
    pub ontology_fingerprint: Option<String>,
    pub ontology_terms: usize,
    pub options: MatchOptions,
    pub stats: MappingStats,
    pub elapsed: Duration,
}
