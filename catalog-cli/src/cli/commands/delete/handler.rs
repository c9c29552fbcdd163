//! Delete command handler

use anyhow::Result;
use colored::*;

use super::DeleteArgs;
use crate::cli::output::write_json_file;
use crate::cli::shared::catalog_client;
use crate::config::Config;
use crate::transfer::runner::{ConsoleReporter, delete_range};

pub async fn handle_delete_command(args: DeleteArgs, config: &Config) -> Result<()> {
    let end = args.end.unwrap_or(args.start);

    if args.start > end {
        println!(
            "{}",
            format!("Empty id range {}..{}; nothing to delete", args.start, end).bright_yellow()
        );
        return Ok(());
    }

    let count = end - args.start + 1;
    if !args.yes {
        println!(
            "Would delete {} products (ids {} to {}). Re-run with {} to delete them.",
            count.to_string().bright_yellow(),
            args.start,
            end,
            "--yes".bold()
        );
        return Ok(());
    }

    let client = catalog_client(config)?;
    println!(
        "{}",
        format!("Deleting {} products (ids {} to {})", count, args.start, end)
            .bright_red()
            .bold()
    );

    let reporter = ConsoleReporter::new(false, false);
    let results = delete_range(&client, args.start, end, &reporter).await;

    if let Some(path) = args.output {
        write_json_file(&path, &results)?;
    }
    Ok(())
}
