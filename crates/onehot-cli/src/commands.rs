use anyhow::Result;
use comfy_table::Table;
use onehot_cli::pipeline::{EncodeRequest, applicable_mode, encode_file, inspect_file};
use onehot_model::{EncodingMode, EncodingSummary};

use crate::cli::{EncodeArgs, InspectArgs};
use crate::summary::{apply_table_style, category_cell, count_cell, dim_cell, header_cell};

pub fn run_encode(args: &EncodeArgs, mode: EncodingMode) -> Result<EncodingSummary> {
    let request = EncodeRequest {
        input: args.input.clone(),
        output: args.output.clone(),
        column: args.column.clone(),
        mode,
    };
    encode_file(&request)
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let distinct = inspect_file(&args.input, &args.column)?;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Value"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    for (position, category) in distinct.iter().enumerate() {
        table.add_row(vec![
            dim_cell(position + 1),
            category_cell(category),
            count_cell(distinct.count(position)),
        ]);
    }
    println!("Column: {}", args.column);
    println!("Rows: {}", distinct.row_count());
    println!("{table}");
    match applicable_mode(distinct.len()) {
        Some(mode) => println!("Distinct values: {} (use `{mode}`)", distinct.len()),
        None => println!("Distinct values: {} (too few to encode)", distinct.len()),
    }
    Ok(())
}
