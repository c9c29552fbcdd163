//! `import`: map a product sheet and create every product

mod handler;

use std::path::PathBuf;

use clap::Args;

pub use handler::handle_import_command;

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Product data file (.xlsx, .xlsm, .xls, .ods or .csv)
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Mapping configuration workbook
    #[arg(short, long, value_name = "FILE")]
    pub mapping: Option<PathBuf>,

    /// Sheet of the mapping workbook (default: first)
    #[arg(long, value_name = "NAME")]
    pub mapping_sheet: Option<String>,

    /// Sheet of the product file (default: first)
    #[arg(short, long, value_name = "NAME")]
    pub sheet: Option<String>,

    /// 0-based row holding the column headers
    #[arg(long, default_value_t = 0)]
    pub header_row: usize,

    /// 1-based first data row to process
    #[arg(long, default_value_t = 1)]
    pub start_row: usize,

    /// Send requests (default is a dry run)
    #[arg(long)]
    pub live: bool,

    /// Update existing products (PUT) instead of creating them
    #[arg(long)]
    pub update: bool,

    /// Print full payloads of dry-run rows
    #[arg(long)]
    pub show_payloads: bool,

    /// Write all row results to this file as JSON
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
