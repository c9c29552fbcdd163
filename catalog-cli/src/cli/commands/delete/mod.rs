//! `delete`: remove products by id range

mod handler;

use std::path::PathBuf;

use clap::Args;

pub use handler::handle_delete_command;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// First product id
    #[arg(value_name = "START_ID")]
    pub start: i64,

    /// Last product id, inclusive (default: START_ID)
    #[arg(value_name = "END_ID")]
    pub end: Option<i64>,

    /// Actually delete; without it the ids are only listed
    #[arg(short, long)]
    pub yes: bool,

    /// Write per-id results to this file as JSON
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
