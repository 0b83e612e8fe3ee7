//! Ontology path resolution.

use std::path::PathBuf;

/// Environment variable naming the default ontology file.
pub const ONTOLOGY_ENV_VAR: &str = "FOODMAP_ONTOLOGY";

/// Resolve the ontology path.
///
/// Resolution order:
/// 1. the explicit path, if given
/// 2. `FOODMAP_ONTOLOGY` environment variable
///
/// Returns `None` when neither is set.
pub fn ontology_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| {
        std::env::var_os(ONTOLOGY_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    })
}
