//! Terminal tables for command output.

use std::fmt::Display;
use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use vistoria_cli::pipeline::ConvertOutcome;
use vistoria_map::AliasTable;
use vistoria_model::{
    CanonicalField, Postura, PreviewLimits, Status, ValidationIssue, ValidationResult, Vocabulary,
};

pub fn print_check(path: &Path, result: &ValidationResult, limits: &PreviewLimits) {
    println!("File: {}", path.display());
    println!(
        "Delimiter: {}  Encoding: {}",
        result.delimiter,
        result.encoding.as_deref().unwrap_or("-")
    );
    print_summary_table(result);

    if !result.columns.is_empty() {
        print_column_table(result);
    }
    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warning in &result.warnings {
            println!("  - {}", warning.message);
        }
    }

    let preview = result.preview(limits);
    let file_errors: Vec<&ValidationIssue> = result
        .errors
        .iter()
        .filter(|issue| issue.is_file_level())
        .collect();
    if !file_errors.is_empty() {
        println!();
        println!("Errors:");
        for issue in file_errors {
            println!("  - {}", issue.message);
        }
    }
    if !preview.invalid_rows.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Row"),
            header_cell("Field"),
            header_cell("Message"),
            header_cell("Value"),
        ]);
        apply_issue_table_style(&mut table);
        align_column(&mut table, 0, CellAlignment::Right);
        for issue in preview.invalid_rows.iter().flat_map(|row| &row.issues) {
            table.add_row(vec![
                Cell::new(issue.row),
                Cell::new(&issue.field),
                Cell::new(&issue.message).fg(Color::Red),
                value_cell(issue.value.as_deref()),
            ]);
        }
        println!();
        println!("Invalid rows:");
        println!("{table}");
        if preview.hidden_invalid > 0 {
            println!("... and {} more invalid rows", preview.hidden_invalid);
        }
    }
    if !preview.valid_rows.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell(CanonicalField::NumeroDemanda.label()),
            header_cell(CanonicalField::Postura.label()),
            header_cell(CanonicalField::DataVistoria.label()),
            header_cell(CanonicalField::Status.label()),
            header_cell(CanonicalField::Endereco.label()),
        ]);
        apply_table_style(&mut table);
        for record in preview.valid_rows {
            table.add_row(vec![
                Cell::new(&record.numero_demanda),
                Cell::new(record.postura),
                Cell::new(&record.data_vistoria),
                Cell::new(record.status),
                value_cell(record.endereco.as_deref()),
            ]);
        }
        println!();
        println!("Valid rows:");
        println!("{table}");
        if preview.hidden_valid > 0 {
            println!("... and {} more valid rows", preview.hidden_valid);
        }
        print_status_table(result);
    }
}

pub fn print_convert(output: &Path, result: &ValidationResult, outcome: &ConvertOutcome) {
    println!("Output: {}", output.display());
    print_summary_table(result);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Written"),
        header_cell("Filtered out"),
        header_cell("Rejected"),
    ]);
    apply_table_style(&mut table);
    for index in 0..3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(outcome.written)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        count_cell(outcome.filtered_out, Color::Yellow),
        count_cell(outcome.rejected, Color::Red),
    ]);
    println!("{table}");
}

pub fn print_vocab(aliases: &AliasTable) {
    print_vocabulary::<Postura>("Postura");
    print_vocabulary::<Status>("Status");

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Label"),
        header_cell("Required"),
        header_cell("Header aliases"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for (field, names) in aliases.iter() {
        table.add_row(vec![
            Cell::new(field.as_str()),
            Cell::new(field.label()),
            if field.is_required() {
                Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold)
            } else {
                dim_cell("-")
            },
            Cell::new(names.join(", ")),
        ]);
    }
    println!();
    println!("Columns:");
    println!("{table}");
}

fn print_vocabulary<V: Vocabulary>(title: &str) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell(title)]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, value) in V::ALL.iter().enumerate() {
        table.add_row(vec![Cell::new(index + 1), Cell::new(value.label())]);
    }
    println!("{table}");
}

fn print_summary_table(result: &ValidationResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Valid"),
        header_cell("Invalid"),
        header_cell("Warnings"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(result.summary.total).add_attribute(Attribute::Bold),
        count_cell(result.summary.valid, Color::Green),
        count_cell(result.summary.errors, Color::Red),
        count_cell(result.warnings.len(), Color::Yellow),
    ]);
    println!("{table}");
}

fn print_column_table(result: &ValidationResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Header"),
        header_cell("Field"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for column in result.columns.columns() {
        let field = match column.mapped_to {
            Some(field) => Cell::new(field.as_str()).fg(Color::Green),
            None => dim_cell("unmapped"),
        };
        table.add_row(vec![
            Cell::new(column.index + 1),
            Cell::new(&column.header),
            field,
        ]);
    }
    println!();
    println!("Columns:");
    println!("{table}");
}

fn print_status_table(result: &ValidationResult) {
    let breakdown = result.status_breakdown();
    let mut table = Table::new();
    table.set_header(vec![header_cell("Status"), header_cell("Records")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in &breakdown.counts {
        table.add_row(vec![
            Cell::new(entry.status),
            count_cell(entry.count, Color::Cyan),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(breakdown.total).add_attribute(Attribute::Bold),
    ]);
    println!();
    println!("By status:");
    println!("{table}");
}

fn value_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) if !value.is_empty() => Cell::new(value),
        _ => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell(content: impl Display) -> Cell {
    Cell::new(content).add_attribute(Attribute::Dim)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_cell_dims_missing_values() {
        assert_eq!(value_cell(Some("Rua A")).content(), "Rua A");
        assert_eq!(value_cell(Some("")).content(), "-");
        assert_eq!(value_cell(None).content(), "-");
    }

    #[test]
    fn test_align_column_out_of_range() {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Rows")]);
        align_column(&mut table, 5, CellAlignment::Right);
        assert_eq!(table.column_count(), 1);
    }
}
