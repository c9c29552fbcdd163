//! Single product command handler

use anyhow::{Context, Result, bail};
use serde_json::Value;

use super::ProductArgs;
use crate::api::CatalogApi;
use crate::cli::output::format_output;
use crate::cli::shared::{catalog_client, load_catalog_mapper, mapping_path, print_mode};
use crate::config::Config;
use crate::transfer::runner::{ConsoleReporter, create_single};
use crate::transfer::{CellValue, ProductRow};

pub async fn handle_product_command(args: ProductArgs, config: &Config) -> Result<()> {
    let record = build_record(&args)?;
    if record.is_empty() {
        bail!("No product fields given. Use --field COLUMN=VALUE, --json or --json-file");
    }

    let mapping = mapping_path(args.mapping.clone(), config)?;
    let mapper = load_catalog_mapper(&mapping, args.mapping_sheet.as_deref())?;

    let client = if args.live {
        Some(catalog_client(config)?)
    } else {
        None
    };
    print_mode(args.live);

    let api = client.as_ref().map(|c| c as &dyn CatalogApi);
    let reporter = ConsoleReporter::new(false, false);
    let result = create_single(&record, &mapper, api, args.update, &reporter).await;

    let value = serde_json::to_value(&result).context("Failed to serialize result")?;
    println!("{}", format_output(&value, args.format)?);
    Ok(())
}

/// Merge JSON input and --field pairs into one record; fields win
fn build_record(args: &ProductArgs) -> Result<ProductRow> {
    let json_text = match (&args.json, &args.json_file) {
        (Some(text), _) => Some(text.clone()),
        (None, Some(path)) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
        ),
        (None, None) => None,
    };

    let mut record = ProductRow::new();
    if let Some(text) = json_text {
        let value: Value = serde_json::from_str(&text).context("Product JSON is not valid JSON")?;
        let Value::Object(map) = value else {
            bail!("Product JSON must be an object of column -> value");
        };
        for (column, value) in &map {
            record.push(column.clone(), CellValue::from_json(value));
        }
    }

    for (column, value) in &args.fields {
        let cell = if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::from(value.as_str())
        };
        record.push(column.clone(), cell);
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(json: Option<&str>, fields: &[(&str, &str)]) -> ProductArgs {
        ProductArgs {
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            json: json.map(str::to_string),
            json_file: None,
            mapping: None,
            mapping_sheet: None,
            live: false,
            update: false,
            format: crate::cli::output::OutputFormat::Json,
        }
    }

    #[test]
    fn test_fields_override_json() {
        let record = build_record(&args(
            Some(r#"{"SKUID": "TEST003", "Days": 15, "Telco": null}"#),
            &[("Days", "30"), ("Hotspot sharing", "")],
        ))
        .unwrap();

        assert_eq!(
            record.columns().collect::<Vec<_>>(),
            vec!["SKUID", "Days", "Telco", "Hotspot sharing"]
        );
        assert_eq!(record.get("Days"), Some(&CellValue::from("30")));
        assert_eq!(record.get("Telco"), Some(&CellValue::Empty));
        assert_eq!(record.get("Hotspot sharing"), Some(&CellValue::Empty));
    }

    #[test]
    fn test_json_must_be_object() {
        assert!(build_record(&args(Some("[1, 2]"), &[])).is_err());
        assert!(build_record(&args(Some("{oops"), &[])).is_err());
    }
}
