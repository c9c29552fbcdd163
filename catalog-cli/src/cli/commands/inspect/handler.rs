//! Sheet listing and preview handlers

use anyhow::Result;
use colored::*;
use serde_json::Value;

use super::{PreviewArgs, SheetsArgs};
use crate::cli::output::format_output;
use crate::transfer::{load_sheet, sheet_names};

pub fn handle_sheets_command(args: SheetsArgs) -> Result<()> {
    let names = sheet_names(&args.file)?;
    println!(
        "{} ({} sheets)",
        args.file.display().to_string().cyan(),
        names.len()
    );
    for (idx, name) in names.iter().enumerate() {
        println!("  {:>2}. {}", idx + 1, name.bright_white());
    }
    Ok(())
}

pub fn handle_preview_command(args: PreviewArgs) -> Result<()> {
    let data = load_sheet(&args.file, args.sheet.as_deref(), args.header_row)?;

    println!(
        "Sheet {}: {} columns, {} data rows",
        data.name.bright_white().bold(),
        data.headers.len(),
        data.len()
    );
    println!("Columns: {}", data.headers.join(", ").cyan());
    println!();

    let rows = Value::Array(data.preview(args.rows).iter().map(|r| r.to_json()).collect());
    println!("{}", format_output(&rows, args.format)?);
    Ok(())
}
