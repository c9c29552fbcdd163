//! Command-line interface

pub mod commands;
pub mod output;
pub mod shared;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use commands::{
    delete::DeleteArgs,
    import::ImportArgs,
    init_mapping::InitMappingArgs,
    inspect::{PreviewArgs, SheetsArgs},
    product::ProductArgs,
    send::SendArgs,
};

#[derive(Parser, Debug)]
#[command(
    name = "catalog-cli",
    version,
    about = "Load products from spreadsheets into the BCSS product catalog",
    long_about = "Reads product rows from a spreadsheet, maps them to catalog payloads \
                  using a mapping workbook, and creates (or deletes) products through \
                  the catalog API. Runs are dry by default; pass --live to send."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Catalog service base URL
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Bearer token (overrides CATALOG_TOKEN and the config file)
    #[arg(long, global = true, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Config file (default: <config dir>/catalog-loader/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Map every row of a product sheet and create the products
    Import(ImportArgs),
    /// Map and create a single product from key=value fields or JSON
    Product(ProductArgs),
    /// Delete products by an inclusive id range
    Delete(DeleteArgs),
    /// List the sheets of a workbook
    Sheets(SheetsArgs),
    /// Show the first rows of a sheet
    Preview(PreviewArgs),
    /// Write the default mapping configuration workbook
    InitMapping(InitMappingArgs),
    /// Send sheet rows to any JSON endpoint using a column-to-field mapping
    Send(SendArgs),
}

impl Commands {
    /// Commands that talk to the catalog or read the mapping path from config
    pub fn needs_config(&self) -> bool {
        !matches!(
            self,
            Commands::Sheets(_) | Commands::Preview(_) | Commands::InitMapping(_)
        )
    }
}

impl Cli {
    /// Default log filter for the verbosity flags
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Build the effective configuration: file, environment, then flags
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                if let Ok(env_path) = dotenvy::dotenv() {
                    log::debug!("Loaded environment from {}", env_path.display());
                }
                let mut config = Config::from_file(path)?;
                config.apply_env(|key| std::env::var(key).ok())?;
                config
            }
            None => Config::load()?,
        };
        config.apply_overrides(self.base_url.clone(), self.token.clone(), self.timeout);
        Ok(config)
    }
}

/// Run the selected command
pub async fn dispatch(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Offline commands must keep working with a broken config file
    let config = if cli.command.needs_config() {
        cli.load_config()?
    } else {
        Config::default()
    };

    match cli.command {
        Commands::Import(args) => commands::import::handle_import_command(args, &config).await,
        Commands::Product(args) => commands::product::handle_product_command(args, &config).await,
        Commands::Delete(args) => commands::delete::handle_delete_command(args, &config).await,
        Commands::Sheets(args) => commands::inspect::handle_sheets_command(args),
        Commands::Preview(args) => commands::inspect::handle_preview_command(args),
        Commands::InitMapping(args) => commands::init_mapping::handle_init_mapping_command(args),
        Commands::Send(args) => commands::send::handle_send_command(args, &config).await,
    }
}
