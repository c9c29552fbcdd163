//! Generic endpoint send handler

use anyhow::{Result, bail};
use colored::*;

use super::SendArgs;
use crate::api::{CatalogApi, EndpointClient, RequestConfig};
use crate::cli::output::write_json_file;
use crate::cli::shared::print_mode;
use crate::config::Config;
use crate::transfer::runner::{self, ConsoleReporter, RunOptions};
use crate::transfer::{ColumnMapper, load_sheet};

pub async fn handle_send_command(args: SendArgs, config: &Config) -> Result<()> {
    let request = request_config(&args)?;

    let mut mapper = ColumnMapper::from_pairs(args.map.iter().cloned());
    if mapper.is_empty() {
        bail!("No column mappings given. Use --map COLUMN=FIELD");
    }
    if let Some(field) = &args.key_field {
        mapper = mapper.with_key_field(field.clone());
    }

    let client = if args.live {
        Some(EndpointClient::new(request, config.timeout())?)
    } else {
        None
    };

    let data = load_sheet(&args.data, args.sheet.as_deref(), args.header_row)?;
    if data.is_empty() {
        println!("{}", format!("No data rows in sheet '{}'", data.name).bright_yellow());
        return Ok(());
    }
    println!(
        "Sending {} rows from {} to {} ({} fields mapped)",
        data.len().to_string().bright_green(),
        args.data.display().to_string().cyan(),
        args.url.cyan(),
        mapper.len()
    );
    print_mode(args.live);

    let options = RunOptions {
        dry_run: !args.live,
        start_row: args.start_row,
        update: args.method.eq_ignore_ascii_case("PUT"),
    };
    let reporter = ConsoleReporter::new(!args.live, true);
    let api = client.as_ref().map(|c| c as &dyn CatalogApi);

    let results = runner::run(&data.rows, &mapper, api, &options, &reporter).await;

    if let Some(path) = args.output {
        write_json_file(&path, &results)?;
    }
    Ok(())
}

/// Request settings from the flags; only POST and PUT are accepted
fn request_config(args: &SendArgs) -> Result<RequestConfig> {
    let method = args.method.to_uppercase();
    if method != "POST" && method != "PUT" {
        bail!("Unsupported HTTP method: {} (use POST or PUT)", args.method);
    }

    let mut request = RequestConfig::new(&args.url).method(method);
    for (name, value) in &args.headers {
        request = request.header(name, value);
    }
    if let Some(user) = &args.user {
        request = request.basic_auth(user, args.password.clone());
    }
    Ok(request)
}
