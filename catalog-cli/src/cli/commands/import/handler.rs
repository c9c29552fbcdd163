//! Import command handler

use anyhow::Result;
use colored::*;

use super::ImportArgs;
use crate::api::CatalogApi;
use crate::cli::output::write_json_file;
use crate::cli::shared::{catalog_client, load_catalog_mapper, mapping_path, print_mode};
use crate::config::Config;
use crate::transfer::load_sheet;
use crate::transfer::runner::{self, ConsoleReporter, RunOptions};

pub async fn handle_import_command(args: ImportArgs, config: &Config) -> Result<()> {
    let mapping = mapping_path(args.mapping, config)?;
    let mapper = load_catalog_mapper(&mapping, args.mapping_sheet.as_deref())?;

    let client = if args.live {
        let client = catalog_client(config)?;
        println!("Target: {}", client.base_url().cyan());
        Some(client)
    } else {
        None
    };

    let data = load_sheet(&args.data, args.sheet.as_deref(), args.header_row)?;
    if data.is_empty() {
        println!("{}", format!("No product rows in sheet '{}'", data.name).bright_yellow());
        return Ok(());
    }
    println!(
        "Processing {} products from {}, starting from row {}",
        data.len().to_string().bright_green(),
        args.data.display().to_string().cyan(),
        args.start_row
    );
    print_mode(args.live);

    let options = RunOptions {
        dry_run: !args.live,
        start_row: args.start_row,
        update: args.update,
    };
    let reporter = ConsoleReporter::new(args.show_payloads, false);
    let api = client.as_ref().map(|c| c as &dyn CatalogApi);

    let results = runner::run(&data.rows, &mapper, api, &options, &reporter).await;

    if let Some(path) = args.output {
        write_json_file(&path, &results)?;
    }
    Ok(())
}
