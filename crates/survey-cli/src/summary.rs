//! Console summary of a repair run.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::RepairResult;

pub fn print_summary(result: &RepairResult) {
    println!("File: {}", result.path.display());
    println!("Data rows: {}", result.rows);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Metric"),
        header_cell("Count"),
    ]);
    apply_table_style(&mut table);
    if let Some(fill) = &result.fill {
        add_count(&mut table, "fill", "stores", fill.stores);
        add_count(&mut table, "fill", "manager names filled", fill.manager_names);
        add_count(&mut table, "fill", "full names filled", fill.full_names);
        add_count(&mut table, "fill", "age bands filled", fill.age_bands);
        add_count(&mut table, "fill", "formats rewritten", fill.formats);
    }
    if let Some(mask) = &result.mask {
        add_count(&mut table, "mask", "MANAGER cells blanked", mask.manager);
        add_count(&mut table, "mask", "STAFF cells blanked", mask.staff);
        add_count(&mut table, "mask", "PA cells blanked", mask.pa);
    }
    if let Some(same_as) = &result.same_as {
        add_count(&mut table, "same-as", "answers copied", same_as.copies);
    }
    println!("{table}");
    if result.dry_run {
        println!("Dry run: no file written.");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }
}

fn add_count(table: &mut Table, stage: &str, metric: &str, count: usize) {
    table.add_row(vec![
        Cell::new(stage).fg(Color::Blue),
        Cell::new(metric),
        count_cell(count),
    ]);
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
