mod api;
mod cli;
mod config;
mod transfer;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_filter()))
        .format_timestamp_secs()
        .init();

    log::debug!("Starting catalog-cli v{}", env!("CARGO_PKG_VERSION"));

    cli::dispatch(cli).await
}
