//! Helpers shared by the command handlers

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::*;

use crate::api::CatalogClient;
use crate::config::Config;
use crate::transfer::{CatalogMapper, read_mapping};

/// Mapping file from the flag, else from the config file
pub fn mapping_path(flag: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    flag.or_else(|| config.mapping_file.clone()).context(
        "No mapping workbook given. Pass --mapping <FILE>, set `mapping_file` in the config, \
         or create one with `catalog-cli init-mapping`",
    )
}

/// Read the mapping workbook and build the catalog mapper
pub fn load_catalog_mapper(path: &Path, sheet: Option<&str>) -> Result<CatalogMapper> {
    let table = read_mapping(path, sheet)
        .with_context(|| format!("Failed to load mapping from {}", path.display()))?;
    println!(
        "Loaded {} field mappings from {}",
        table.len().to_string().bright_green(),
        path.display().to_string().cyan()
    );
    let mapper = CatalogMapper::new(table);
    for entry in mapper.mapping().entries_sorted() {
        log::debug!(
            "  {} <- {}",
            entry.target_field,
            entry.source_column.as_deref().unwrap_or("-")
        );
    }
    Ok(mapper)
}

/// Authenticated catalog client; fails without a token
pub fn catalog_client(config: &Config) -> Result<CatalogClient> {
    let token = config.require_token()?;
    CatalogClient::new(&config.base_url, token, config.timeout())
}

pub fn print_mode(live: bool) {
    if live {
        println!("{}", "LIVE RUN: requests will be sent".bright_red().bold());
    } else {
        println!(
            "{}",
            "Dry run: payloads are built but not sent (use --live to send)".bright_yellow()
        );
    }
    println!();
}

/// Parse `key=value`
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Parse an HTTP header given as `Name: value`
pub fn parse_header(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once(':')
        .ok_or_else(|| format!("expected 'Name: value', got '{}'", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty header name in '{}'", s));
    }
    Ok((name.to_string(), value.trim().to_string()))
}
