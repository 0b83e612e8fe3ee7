//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use foodmap_map::{DEFAULT_MAX_NGRAM, MAX_NGRAM_LIMIT, MatchOptions};

#[derive(Parser)]
#[command(
    name = "foodmap",
    version,
    about = "Map free-text food labels onto ontology terms",
    long_about = "Map free-text food labels onto ontology terms.\n\n\
                  Each label is matched as a whole first; labels that do not match\n\
                  are decomposed into the most specific sub-phrases the ontology knows."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow input labels to appear in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Map every label of an input file and write the mapping JSON.
    Map(MapArgs),

    /// Resolve a single label and show how it matched.
    Lookup(LookupArgs),

    /// Show what an ontology file contains.
    Ontology(OntologyArgs),
}

/// Ontology, suffix and lexicon files.
#[derive(Args, Clone, Default)]
pub struct OntologyArgs {
    /// Ontology table (.csv or .tsv). Defaults to $FOODMAP_ONTOLOGY.
    #[arg(long = "ontology", value_name = "PATH")]
    pub ontology: Option<PathBuf>,

    /// Suffix list for relaxed lookups, one suffix per line.
    #[arg(long = "suffixes", value_name = "PATH")]
    pub suffixes: Option<PathBuf>,

    /// Spelling, abbreviation and non-English rewrites (kind,from,to).
    #[arg(long = "lexicon", value_name = "PATH")]
    pub lexicon: Option<PathBuf>,
}

/// Engine tuning flags.
#[derive(Args, Clone, Copy)]
pub struct MatchArgs {
    /// Longest sub-phrase (in words) tried when a label is decomposed.
    #[arg(
        long = "max-ngram",
        value_name = "N",
        default_value_t = DEFAULT_MAX_NGRAM,
        value_parser = parse_max_ngram
    )]
    pub max_ngram: usize,

    /// Only accept exact phrase matches (no suffix relaxation).
    #[arg(long = "no-suffixes")]
    pub no_suffixes: bool,
}

impl MatchArgs {
    pub fn options(self) -> MatchOptions {
        MatchOptions {
            max_ngram: self.max_ngram,
            relax_suffixes: !self.no_suffixes,
        }
    }
}

#[derive(Args)]
pub struct MapArgs {
    /// Input table (.csv or .tsv) with an id and a label column.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output JSON file (default: stdout).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub ontology: OntologyArgs,

    #[command(flatten)]
    pub matching: MatchArgs,

    /// Do not print the summary table.
    #[arg(long = "quiet-summary")]
    pub quiet_summary: bool,
}

#[derive(Args)]
pub struct LookupArgs {
    /// Label to resolve.
    #[arg(value_name = "LABEL")]
    pub label: String,

    #[command(flatten)]
    pub ontology: OntologyArgs,

    #[command(flatten)]
    pub matching: MatchArgs,
}

fn parse_max_ngram(raw: &str) -> Result<usize, String> {
    let value: usize = raw
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;
    if (1..=MAX_NGRAM_LIMIT).contains(&value) {
        Ok(value)
    } else {
        Err(format!("must be between 1 and {MAX_NGRAM_LIMIT}"))
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
