//! Default mapping workbook handler

use anyhow::{Result, bail};
use colored::*;

use super::InitMappingArgs;
use crate::transfer::write_default_mapping;

pub fn handle_init_mapping_command(args: InitMappingArgs) -> Result<()> {
    if args.path.exists() && !args.force {
        bail!(
            "{} already exists. Use --force to overwrite it",
            args.path.display()
        );
    }

    write_default_mapping(&args.path)?;
    println!(
        "Default mapping configuration written to {}",
        args.path.display().to_string().bright_green()
    );
    Ok(())
}
