//! `send`: push sheet rows to an arbitrary JSON endpoint

mod handler;

use std::path::PathBuf;

use clap::Args;

use crate::cli::shared::{parse_header, parse_key_value};

pub use handler::handle_send_command;

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Data file (.xlsx, .xlsm, .xls, .ods or .csv)
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Endpoint URL
    #[arg(long, value_name = "URL")]
    pub url: String,

    /// Column to field mapping as COLUMN=FIELD (repeatable)
    #[arg(short, long = "map", value_name = "COLUMN=FIELD", value_parser = parse_key_value, required = true)]
    pub map: Vec<(String, String)>,

    /// HTTP method, POST or PUT
    #[arg(short = 'X', long, default_value = "POST")]
    pub method: String,

    /// Extra header as "Name: value" (repeatable)
    #[arg(short = 'H', long = "header", value_name = "NAME: VALUE", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Basic auth user
    #[arg(long)]
    pub user: Option<String>,

    /// Basic auth password
    #[arg(long, requires = "user")]
    pub password: Option<String>,

    /// Field used to label each record in the report
    #[arg(long, value_name = "FIELD")]
    pub key_field: Option<String>,

    /// Sheet to read (default: first)
    #[arg(short, long, value_name = "NAME")]
    pub sheet: Option<String>,

    /// 0-based row holding the column headers
    #[arg(long, default_value_t = 0)]
    pub header_row: usize,

    /// 1-based first data row to send
    #[arg(long, default_value_t = 1)]
    pub start_row: usize,

    /// Send requests (default is a dry run)
    #[arg(long)]
    pub live: bool,

    /// Write all row results to this file as JSON
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
