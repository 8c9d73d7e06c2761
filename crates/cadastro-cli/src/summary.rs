//! Terminal output for the subcommands.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::{BatchResult, FieldKind, FieldOutcome, Validated};

pub fn print_check_results(outcomes: &[FieldOutcome]) {
    for outcome in outcomes {
        match &outcome.result {
            Ok(validated) => {
                match validated.normalized() {
                    Some(normalized) => {
                        println!("{} {}: valid -> {normalized}", outcome.kind, outcome.display_input());
                    }
                    None => println!("{}: accepted", outcome.kind),
                }
                if let Validated::Located { address, .. } = validated {
                    let mut place = Vec::new();
                    for part in [&address.street, &address.neighborhood] {
                        if !part.is_empty() {
                            place.push(part.as_str());
                        }
                    }
                    let place = if place.is_empty() {
                        String::new()
                    } else {
                        format!("{} - ", place.join(", "))
                    };
                    println!("  {place}{}/{}", address.city, address.state);
                }
            }
            Err(err) => {
                println!("{} {}: invalid ({err})", outcome.kind, outcome.display_input());
            }
        }
    }
}

pub fn print_batch_summary(result: &BatchResult) {
    println!("File: {}", result.file.display());
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Kind"),
        header_cell("Input"),
        header_cell("Status"),
        header_cell("Details"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);

    for row in &result.rows {
        let outcome = &row.outcome;
        let (status, details) = match &outcome.result {
            Ok(validated) => (
                Cell::new("valid").fg(Color::Green),
                validated.normalized().unwrap_or("-").to_string(),
            ),
            Err(err) => (Cell::new("invalid").fg(Color::Red), err.to_string()),
        };
        table.add_row(vec![
            Cell::new(row.line),
            Cell::new(outcome.kind.label()),
            Cell::new(outcome.display_input()),
            status,
            Cell::new(details),
        ]);
    }
    println!("{table}");

    println!(
        "{} row(s): {} valid, {} invalid",
        result.rows.len(),
        result.valid_count(),
        result.invalid_count()
    );
}

pub fn print_kinds(kinds: &[(FieldKind, &'static str)]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Kind"), header_cell("Accepted shape")]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for (kind, hint) in kinds {
        table.add_row(vec![Cell::new(kind.label()), Cell::new(hint)]);
    }
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
