//! Rendering results for the terminal or a file

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::*;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Single-line JSON
    JsonCompact,
    /// Comma-separated values, one line per record
    Csv,
}

/// Format data according to the specified output format
pub fn format_output(data: &Value, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(data).context("Failed to format JSON output"),
        OutputFormat::JsonCompact => serde_json::to_string(data).context("Failed to format JSON output"),
        OutputFormat::Csv => json_to_csv(data),
    }
}

/// Write serializable results to `path` as pretty JSON
pub fn write_json_file<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data).context("Failed to serialize results")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write output to: {}", path.display()))?;
    println!("Results saved to: {}", path.display().to_string().bright_green());
    Ok(())
}

/// Convert JSON data to CSV using the csv writer
fn json_to_csv(data: &Value) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    match data {
        Value::Array(items) => {
            // Headers: union of object keys, in first-seen order
            let mut headers: Vec<String> = Vec::new();
            for item in items {
                if let Value::Object(obj) = item {
                    for key in obj.keys() {
                        if !headers.contains(key) {
                            headers.push(key.clone());
                        }
                    }
                }
            }
            if headers.is_empty() {
                return Ok(String::new());
            }
            writer.write_record(&headers)?;
            for item in items {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| item.get(h).map(value_to_cell).unwrap_or_default())
                    .collect();
                writer.write_record(&row)?;
            }
        }
        Value::Object(obj) => {
            writer.write_record(["key", "value"])?;
            for (key, value) in obj {
                writer.write_record([key.as_str(), value_to_cell(value).as_str()])?;
            }
        }
        other => {
            writer.write_record(["value"])?;
            writer.write_record([value_to_cell(other)])?;
        }
    }

    let bytes = writer.into_inner().context("Failed to flush CSV output")?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
