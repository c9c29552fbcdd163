//! `init-mapping`: write the default mapping workbook

mod handler;

use std::path::PathBuf;

use clap::Args;

pub use handler::handle_init_mapping_command;

pub const DEFAULT_MAPPING_FILE: &str = "BCSS_Mapping_Configuration.xlsx";

#[derive(Args, Debug)]
pub struct InitMappingArgs {
    /// Where to write the workbook
    #[arg(value_name = "FILE", default_value = DEFAULT_MAPPING_FILE)]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}
