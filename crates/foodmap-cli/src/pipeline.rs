//! Load, map and write stages shared by the subcommands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use foodmap_map::{MappingEngine, MappingStats, MatchOptions};
use foodmap_model::{InputRecord, MappingResult};
use foodmap_normalize::{Lexicon, StandardNormalizer};
use foodmap_ontology::{ONTOLOGY_ENV_VAR, Ontology, load_ontology, load_suffixes, ontology_path};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::{debug, info};

use crate::logging::redact_value;

/// Output indentation, matching the layout of existing mapping files.
const JSON_INDENT: &[u8] = b"   ";

/// Files that make up a matching context.
#[derive(Debug, Clone, Default)]
pub struct ContextPaths {
    /// Ontology table; falls back to `FOODMAP_ONTOLOGY`.
    pub ontology: Option<PathBuf>,
    pub suffixes: Option<PathBuf>,
    pub lexicon: Option<PathBuf>,
}

/// A loaded ontology and the normalizer built for it.
#[derive(Debug)]
pub struct MatchContext {
    pub ontology: Ontology,
    pub normalizer: StandardNormalizer,
}

impl MatchContext {
    pub fn engine(
        &self,
        options: MatchOptions,
    ) -> MappingEngine<'_, Ontology, StandardNormalizer> {
        MappingEngine::new(&self.ontology, &self.normalizer, options)
    }
}

/// Loads the ontology, suffix list and lexicon.
pub fn load_context(paths: &ContextPaths) -> Result<MatchContext> {
    let path = ontology_path(paths.ontology.clone())
        .ok_or_else(|| anyhow!("no ontology given: pass --ontology or set {ONTOLOGY_ENV_VAR}"))?;
    let mut ontology =
        load_ontology(&path).with_context(|| format!("load ontology {}", path.display()))?;
    if let Some(suffix_path) = &paths.suffixes {
        let suffixes = load_suffixes(suffix_path)
            .with_context(|| format!("load suffixes {}", suffix_path.display()))?;
        debug!(count = suffixes.len(), "custom suffix list");
        ontology = ontology.with_suffixes(suffixes);
    }

    let lexicon = match &paths.lexicon {
        Some(lexicon_path) => Lexicon::load(lexicon_path)
            .with_context(|| format!("load lexicon {}", lexicon_path.display()))?,
        None => Lexicon::new(),
    };
    let normalizer = StandardNormalizer::new()
        .with_lexicon(lexicon)
        .with_vocabulary(ontology.vocabulary());

    Ok(MatchContext {
        ontology,
        normalizer,
    })
}

/// Maps every record and logs the inputs that found nothing.
pub fn map_inputs(
    context: &MatchContext,
    records: &[InputRecord],
    options: MatchOptions,
) -> (MappingResult, MappingStats) {
    let engine = context.engine(options);
    let (result, stats) = engine.map_records(records);
    for (key, value) in result.mapping_output() {
        if value.is_empty() {
            debug!(input = redact_value(key), "no ontology match");
        }
    }
    (result, stats)
}

/// Serializes with three-space indentation.
pub fn render_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value
        .serialize(&mut serializer)
        .context("serialize mapping result")?;
    String::from_utf8(buffer).context("mapping result is not UTF-8")
}

/// Writes `json` to `output`, or stdout when no path is given.
pub fn write_output(json: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create {}", parent.display()))?;
            }
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), "mapping written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
