//! `product`: map and create one product from ad-hoc fields

mod handler;

use std::path::PathBuf;

use clap::Args;

use crate::cli::output::OutputFormat;
use crate::cli::shared::parse_key_value;

pub use handler::handle_product_command;

#[derive(Args, Debug)]
pub struct ProductArgs {
    /// Column value as COLUMN=VALUE (repeatable)
    #[arg(short, long = "field", value_name = "COLUMN=VALUE", value_parser = parse_key_value)]
    pub fields: Vec<(String, String)>,

    /// Record as a JSON object of column -> value
    #[arg(long, value_name = "JSON", conflicts_with = "json_file")]
    pub json: Option<String>,

    /// File holding the record as a JSON object
    #[arg(long, value_name = "FILE")]
    pub json_file: Option<PathBuf>,

    /// Mapping configuration workbook
    #[arg(short, long, value_name = "FILE")]
    pub mapping: Option<PathBuf>,

    /// Sheet of the mapping workbook (default: first)
    #[arg(long, value_name = "NAME")]
    pub mapping_sheet: Option<String>,

    /// Send the request (default is a dry run)
    #[arg(long)]
    pub live: bool,

    /// Update an existing product (PUT) instead of creating it
    #[arg(long)]
    pub update: bool,

    /// How to print the result
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}
