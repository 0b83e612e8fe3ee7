use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::MapRunSummary;

/// Fingerprints are shown shortened.
const FINGERPRINT_CHARS: usize = 12;

pub fn print_summary(summary: &MapRunSummary) {
    eprintln!("{}", summary_table(summary));
}

pub fn summary_table(summary: &MapRunSummary) -> Table {
    let stats = &summary.stats;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Mapping"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![
        Cell::new("Input"),
        Cell::new(summary.input.display()),
    ]);
    table.add_row(vec![
        Cell::new("Output"),
        match &summary.output {
            Some(path) => Cell::new(path.display()),
            None => dim_cell("stdout"),
        },
    ]);
    table.add_row(vec![
        Cell::new("Ontology"),
        match &summary.ontology_source {
            Some(source) => Cell::new(source),
            None => dim_cell("-"),
        },
    ]);
    table.add_row(vec![
        Cell::new("Fingerprint"),
        match &summary.ontology_fingerprint {
            Some(hash) => Cell::new(short_fingerprint(hash)),
            None => dim_cell("-"),
        },
    ]);
    table.add_row(vec![Cell::new("Ontology terms"), Cell::new(summary.ontology_terms)]);
    table.add_row(vec![
        Cell::new("Options"),
        Cell::new(format!(
            "max-ngram {}, suffixes {}",
            summary.options.max_ngram,
            if summary.options.relax_suffixes { "on" } else { "off" }
        )),
    ]);
    table.add_row(vec![
        Cell::new("Inputs").add_attribute(Attribute::Bold),
        Cell::new(stats.inputs).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Full matches"),
        count_cell(stats.full_matches, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Component matches"),
        count_cell(stats.component_matches, Color::Green),
    ]);
    table.add_row(vec![
        dim_cell("  multi-term"),
        count_cell(stats.multi_term, Color::Blue),
    ]);
    table.add_row(vec![
        Cell::new("Unmatched"),
        count_cell(stats.unmatched, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Elapsed"),
        dim_cell(format!("{} ms", summary.elapsed.as_millis())),
    ]);
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn short_fingerprint(hash: &str) -> &str {
    hash.get(..FINGERPRINT_CHARS).unwrap_or(hash)
}
