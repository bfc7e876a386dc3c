use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::ImportResult;

pub fn print_summary(result: &ImportResult) {
    println!("Source: {}", result.source.display());
    if result.dry_run {
        println!("Ledger: {} (dry run, not written)", result.ledger.display());
    } else {
        println!("Ledger: {}", result.ledger.display());
    }
    if let Some(outbox) = &result.outbox {
        println!("Outbox: {}", outbox.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Rows selected"), Cell::new(result.selected)]);
    table.add_row(vec![
        Cell::new("Rows imported"),
        count_cell(result.imported, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Duplicates skipped"),
        count_cell(result.duplicates, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Malformed skipped"),
        count_cell(result.malformed.len(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Notifications sent"),
        Cell::new(result.notifications_sent),
    ]);
    table.add_row(vec![
        Cell::new("Notification failures"),
        count_cell(result.errors.len(), Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Ledger rows"),
        Cell::new(result.ledger_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if !result.malformed.is_empty() {
        println!("Skipped as malformed:");
        for message in &result.malformed {
            println!("- {message}");
        }
    }
    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
