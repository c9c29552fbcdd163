//! Read the mapping configuration sheet into a MappingTable

use std::path::Path;

use anyhow::{Result, bail};

use crate::transfer::{MappingEntry, MappingTable};

use crate::transfer::excel::load_sheet;
use super::headers;

/// Read a mapping table from a workbook or CSV file
///
/// Rows that are entirely blank or have no target field are skipped. When a
/// target field appears twice the later row wins.
pub fn read_mapping(path: &Path, sheet: Option<&str>) -> Result<MappingTable> {
    let data = load_sheet(path, sheet, 0)?;

    for required in [headers::TARGET_FIELD, headers::SOURCE_COLUMN] {
        if !data.headers.iter().any(|h| h == required) {
            bail!(
                "Mapping sheet '{}' is missing the '{}' column",
                data.name,
                required
            );
        }
    }

    let mut table = MappingTable::new();
    for (idx, row) in data.rows.iter().enumerate() {
        if row.is_blank() {
            continue;
        }

        let text = |column: &str| {
            row.get(column)
                .and_then(|v| v.as_text())
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let Some(target_field) = text(headers::TARGET_FIELD) else {
            continue;
        };

        let entry = MappingEntry {
            target_field,
            source_column: text(headers::SOURCE_COLUMN),
            note: text(headers::NOTE),
        };

        if let Some(previous) = table.insert(entry) {
            log::warn!(
                "Mapping row {} redefines '{}'; the later row wins",
                idx + 2,
                previous.target_field
            );
        }
    }

    if table.is_empty() {
        bail!("Mapping sheet '{}' has no field mappings", data.name);
    }

    log::info!("Loaded {} field mappings", table.len());
    Ok(table)
}
