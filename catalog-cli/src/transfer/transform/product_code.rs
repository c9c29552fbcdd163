//! Product code derivation: "{SKUID}-{days}", "{SKUID}", or a timestamped fallback

use chrono::{DateTime, Local};

use crate::transfer::ProductRow;

/// Prefix for generated codes when the row has no SKUID
pub const GENERATED_PREFIX: &str = "SIM-";

/// Derive the product code for a row using the current local time for the fallback
pub fn product_code(row: &ProductRow) -> String {
    product_code_at(row, Local::now())
}

/// Derive the product code for a row, with an explicit clock for the fallback
///
/// The SKUID comes from any column whose name contains "SKUID" (any case); the
/// day count from a column named exactly "days" after trimming (any case). When
/// several columns qualify, the right-most non-empty one wins.
pub fn product_code_at(row: &ProductRow, now: DateTime<Local>) -> String {
    let mut skuid = String::new();
    let mut days = String::new();

    for (column, value) in row.iter() {
        let Some(text) = value.as_text() else {
            continue;
        };
        if column.to_uppercase().contains("SKUID") {
            skuid = text.clone();
        }
        if column.trim().eq_ignore_ascii_case("days") {
            days = text;
        }
    }

    let skuid = skuid.trim();
    let days = days.trim();
    match (skuid.is_empty(), days.is_empty()) {
        (false, false) => format!("{}-{}", skuid, days),
        (false, true) => skuid.to_string(),
        (true, _) => format!("{}{}", GENERATED_PREFIX, now.format("%Y%m%d%H%M%S")),
    }
}
