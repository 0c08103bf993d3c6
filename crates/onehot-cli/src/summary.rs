use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use onehot_model::{Category, EncodingSummary};

use crate::cli::SummaryFormatArg;

pub fn print_summary(summary: &EncodingSummary, format: SummaryFormatArg) -> Result<()> {
    match format {
        SummaryFormatArg::Json => {
            let json =
                serde_json::to_string_pretty(summary).context("failed to serialize summary")?;
            println!("{json}");
        }
        SummaryFormatArg::Table => print_summary_table(summary),
    }
    Ok(())
}

fn print_summary_table(summary: &EncodingSummary) {
    println!("Column: {} ({})", summary.column, summary.mode);
    println!("Rows: {}", summary.row_count);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Indicator"),
        header_cell("Value"),
        header_cell("Rows set"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for indicator in &summary.indicators {
        table.add_row(vec![
            Cell::new(&indicator.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            category_cell(&indicator.category),
            count_cell(indicator.count),
        ]);
    }
    let uncovered = summary.uncovered_rows();
    if uncovered > 0 {
        table.add_row(vec![
            dim_cell("-"),
            dim_cell("(other)"),
            dim_cell(uncovered),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn category_cell(category: &Category) -> Cell {
    match category {
        Category::Missing => Cell::new(category.label())
            .fg(Color::DarkGrey)
            .add_attribute(Attribute::Italic),
        Category::Value(value) => Cell::new(value),
    }
}

pub fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
