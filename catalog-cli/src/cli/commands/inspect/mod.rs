//! `sheets` and `preview`: look into a data file before importing it

mod handler;

use std::path::PathBuf;

use clap::Args;

use crate::cli::output::OutputFormat;

pub use handler::{handle_preview_command, handle_sheets_command};

#[derive(Args, Debug)]
pub struct SheetsArgs {
    /// Workbook or CSV file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Workbook or CSV file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Sheet to read (default: first)
    #[arg(short, long, value_name = "NAME")]
    pub sheet: Option<String>,

    /// 0-based row holding the column headers
    #[arg(long, default_value_t = 0)]
    pub header_row: usize,

    /// Number of data rows to show
    #[arg(short = 'n', long, default_value_t = 5)]
    pub rows: usize,

    /// How to print the rows
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}
