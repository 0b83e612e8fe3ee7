use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment, Table};
use foodmap_ingest::read_input_records;
use foodmap_model::{MatchStage, TermId};
use foodmap_ontology::OntologyLookup;
use tracing::{info, info_span, trace};

use foodmap_cli::logging::redact_value;
use foodmap_cli::pipeline::{ContextPaths, load_context, map_inputs, render_json, write_output};

use crate::cli::{LookupArgs, MapArgs, OntologyArgs};
use crate::summary::{align_column, apply_table_style, dim_cell, header_cell};
use crate::types::MapRunSummary;

/// Number of root terms listed by `ontology`.
const ROOTS_SHOWN: usize = 10;

fn context_paths(args: &OntologyArgs) -> ContextPaths {
    ContextPaths {
        ontology: args.ontology.clone(),
        suffixes: args.suffixes.clone(),
        lexicon: args.lexicon.clone(),
    }
}

pub fn run_map(args: &MapArgs) -> Result<MapRunSummary> {
    let started = Instant::now();
    let options = args.matching.options();

    // =========================================================================
    // Stage 1: Load ontology, suffixes and lexicon
    // =========================================================================
    let load_span = info_span!("load");
    let context = load_span.in_scope(|| load_context(&context_paths(&args.ontology)))?;

    // =========================================================================
    // Stage 2: Ingest input records
    // =========================================================================
    let ingest_span = info_span!("ingest", input = %args.input.display());
    let records = ingest_span.in_scope(|| {
        read_input_records(&args.input)
            .with_context(|| format!("read input {}", args.input.display()))
    })?;
    for record in &records {
        trace!(input_id = %record.id, label = redact_value(&record.label), "input record");
    }

    // =========================================================================
    // Stage 3: Map
    // =========================================================================
    let map_span = info_span!("map", records = records.len());
    let (result, stats) = map_span.in_scope(|| map_inputs(&context, &records, options));

    // =========================================================================
    // Stage 4: Write
    // =========================================================================
    let json = render_json(&result)?;
    write_output(&json, args.output.as_deref())?;

    info!(
        inputs = stats.inputs,
        matched = result.matched_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "map finished"
    );
    Ok(MapRunSummary {
        input: args.input.clone(),
        output: args.output.clone(),
        ontology_source: context.ontology.source().map(str::to_string),
        ontology_fingerprint: context.ontology.fingerprint().map(str::to_string),
        ontology_terms: context.ontology.len(),
        options,
        stats,
        elapsed: started.elapsed(),
    })
}

pub fn run_lookup(args: &LookupArgs) -> Result<()> {
    let context = load_context(&context_paths(&args.ontology))?;
    let engine = context.engine(args.matching.options());
    let resolution = engine.resolve(&args.label);

    let stage = match (resolution.stage, resolution.via) {
        (MatchStage::Full, Some(via)) => format!("full ({})", via.as_str()),
        (stage, _) => stage.as_str().to_string(),
    };
    println!("Label: {}", args.label);
    println!("Stage: {stage}");
    if !resolution.outcome.is_match() {
        println!("No ontology term matched.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Term"),
        header_cell("Label"),
        header_cell("Ancestors"),
    ]);
    apply_table_style(&mut table);
    for term in resolution.outcome.terms() {
        let chains = context.ontology.ancestor_chains(&term.id);
        let rendered: Vec<String> = chains
            .iter()
            .filter(|chain| chain.len() > 1)
            .map(|chain| {
                chain[1..]
                    .iter()
                    .map(TermId::as_str)
                    .collect::<Vec<_>>()
                    .join(" > ")
            })
            .collect();
        table.add_row(vec![
            Cell::new(term.id.as_str()),
            Cell::new(&term.label),
            if rendered.is_empty() {
                dim_cell("(root)")
            } else {
                Cell::new(rendered.join("\n"))
            },
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_ontology(args: &OntologyArgs) -> Result<()> {
    let context = load_context(&context_paths(args))?;
    let ontology = &context.ontology;

    let mut table = Table::new();
    table.set_header(vec![header_cell("Ontology"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Left);
    table.add_row(vec![
        Cell::new("Source"),
        Cell::new(ontology.source().unwrap_or("-")),
    ]);
    table.add_row(vec![
        Cell::new("Fingerprint"),
        Cell::new(ontology.fingerprint().unwrap_or("-")),
    ]);
    table.add_row(vec![Cell::new("Terms"), Cell::new(ontology.len())]);
    table.add_row(vec![Cell::new("Phrases"), Cell::new(ontology.phrase_count())]);
    table.add_row(vec![
        Cell::new("Suffixes"),
        Cell::new(ontology.suffixes().join(", ")),
    ]);

    let roots = ontology.roots();
    let mut listed: Vec<String> = roots
        .iter()
        .take(ROOTS_SHOWN)
        .map(|term| format!("{} ({})", term.label, term.id))
        .collect();
    if roots.len() > ROOTS_SHOWN {
        listed.push(format!("... {} more", roots.len() - ROOTS_SHOWN));
    }
    table.add_row(vec![
        Cell::new(format!("Roots ({})", roots.len())),
        Cell::new(listed.join("\n")),
    ]);
    println!("{table}");
    Ok(())
}
