//! Catalog mapper - turns one product row into a product create payload

use anyhow::{Context, Result};

use crate::transfer::{
    AttributeEntry, AttributeValue, CellValue, DEFAULT_VAT, DESCRIPTION_EN, DESCRIPTION_VI,
    MappingEntry, MappingTable, ProductPayload, ProductRow,
};

use super::areas::area_code;
use super::attributes::AttributeSlot;
use super::normalize::normalize;
use super::product_code::product_code;

/// Mapping-sheet label of the price field
pub const PRICE_FIELD: &str = "Giá hàng hóa";
/// Mapping-sheet label of the VAT field
pub const VAT_FIELD: &str = "VAT";
/// Note marker for fields whose source column doubles as a literal value
pub const FIXED_TEXT_NOTE: &str = "Text cố định";

/// Source "columns" that are really fixed values
const SENTINEL_COLUMNS: &[(&str, &str)] = &[
    ("Không bắt buộc", "0"),
    ("SIM outbound", "SIM outbound"),
    ("Cái", "Cái"),
];

/// Turns a product row into a JSON request body
///
/// Implemented by the catalog mapper and by the generic column mapper so the
/// batch runner can drive either.
pub trait RowMapper {
    /// Build the request body for one row
    fn map_row(&self, row: &ProductRow) -> Result<serde_json::Value>;

    /// Human-facing identifier of a mapped record (e.g. product code)
    fn record_key(&self, _payload: &serde_json::Value) -> Option<String> {
        None
    }
}

/// Top-level scalar fields copied straight from the sheet
#[derive(Debug, Clone, Copy)]
enum ScalarField {
    ProductCode,
    ProductName,
    PackageCode,
}

impl ScalarField {
    const ALL: [ScalarField; 3] = [
        ScalarField::ProductCode,
        ScalarField::ProductName,
        ScalarField::PackageCode,
    ];

    fn label(self) -> &'static str {
        match self {
            ScalarField::ProductCode => "Mã sản phẩm",
            ScalarField::ProductName => "Tên sản phẩm",
            ScalarField::PackageCode => "SKY package code",
        }
    }

    fn assign(self, payload: &mut ProductPayload, value: String) {
        match self {
            ScalarField::ProductCode => payload.product_code = value,
            ScalarField::ProductName => payload.product_name = value,
            ScalarField::PackageCode => payload.pck_code = Some(value),
        }
    }
}

/// Maps product rows to catalog payloads using a mapping table
#[derive(Debug, Clone)]
pub struct CatalogMapper {
    mapping: MappingTable,
}

impl CatalogMapper {
    pub fn new(mapping: MappingTable) -> Self {
        Self { mapping }
    }

    pub fn mapping(&self) -> &MappingTable {
        &self.mapping
    }

    /// Build the product payload for one row
    ///
    /// Never fails: missing configuration skips the field, unparsable price/VAT
    /// fall back to their defaults, unresolved attributes stay empty.
    pub fn map_row_to_payload(&self, row: &ProductRow) -> ProductPayload {
        let mut payload = ProductPayload::default();

        for field in ScalarField::ALL {
            if let Some(value) = self.scalar_value(field.label(), row) {
                field.assign(&mut payload, value);
            }
        }

        payload.product_description = DESCRIPTION_VI.to_string();
        payload.product_description_en = DESCRIPTION_EN.to_string();

        if let Some(cell) = self.mapped_cell(PRICE_FIELD, row) {
            payload.set_price(parse_amount(cell).unwrap_or(0.0));
        }
        if let Some(cell) = self.mapped_cell(VAT_FIELD, row) {
            payload.set_vat(parse_amount(cell).unwrap_or(DEFAULT_VAT));
        }

        for slot in AttributeSlot::ALL {
            let Some(entry) = self.mapping.get(slot.field_label()) else {
                continue;
            };
            let value = resolve_attribute(slot, entry, row);
            payload
                .attribute_value_list
                .push(AttributeEntry::new(slot.id(), slot.post_process(value)));
        }

        payload.product_code = product_code(row);
        payload
    }

    /// Non-blank cell of the column configured for `field`
    fn mapped_cell<'r>(&self, field: &str, row: &'r ProductRow) -> Option<&'r CellValue> {
        let column = self.mapping.source_column(field)?;
        row.get(column).filter(|cell| !cell.is_blank())
    }

    fn scalar_value(&self, field: &str, row: &ProductRow) -> Option<String> {
        let entry = self.mapping.get(field)?;
        let column = entry.source_column.as_deref()?;
        normalize(row.get(column)?, entry.note())
    }
}

impl RowMapper for CatalogMapper {
    fn map_row(&self, row: &ProductRow) -> Result<serde_json::Value> {
        serde_json::to_value(self.map_row_to_payload(row))
            .context("Failed to serialize product payload")
    }

    fn record_key(&self, payload: &serde_json::Value) -> Option<String> {
        payload
            .get("productCode")
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }
}

fn parse_amount(cell: &CellValue) -> Option<f64> {
    cell.as_f64().filter(|f| f.is_finite())
}

/// Resolve the raw value of one attribute slot, before post-processing
fn resolve_attribute(slot: AttributeSlot, entry: &MappingEntry, row: &ProductRow) -> AttributeValue {
    let Some(column) = entry.source_column.as_deref() else {
        return AttributeValue::default();
    };
    let note = entry.note();

    match slot {
        AttributeSlot::HotspotSharing => {
            let supported = row
                .get(column)
                .is_some_and(|cell| cell.to_string().to_lowercase().contains("support"));
            return AttributeValue::text(if supported { "1" } else { "0" });
        }
        AttributeSlot::CoverageArea => {
            return match row.get(column) {
                Some(cell) => {
                    let name = cell.to_string();
                    area_code(&name).map_or(AttributeValue::Text(name), AttributeValue::Int)
                }
                None => AttributeValue::default(),
            };
        }
        _ => {}
    }

    if let Some((_, fixed)) = SENTINEL_COLUMNS.iter().find(|(sentinel, _)| *sentinel == column) {
        return AttributeValue::text(*fixed);
    }

    if note.is_some_and(|n| n.contains(FIXED_TEXT_NOTE)) {
        return match row.get(column) {
            Some(cell) if !cell.is_blank() => normalize(cell, note).into(),
            _ => AttributeValue::text(column),
        };
    }

    if let Some(cell) = row.get(column) {
        return normalize(cell, note).map_or_else(AttributeValue::default, AttributeValue::Text);
    }

    // Loose match: a header containing the configured name or contained in it
    let wanted = column.to_lowercase();
    let fuzzy = row.iter().find(|(header, _)| {
        let header = header.to_lowercase();
        header.contains(&wanted) || wanted.contains(&header)
    });
    match fuzzy {
        Some((header, cell)) => {
            log::debug!(
                "Attribute {} matched column '{}' loosely (configured '{}')",
                slot,
                header,
                column
            );
            normalize(cell, note).map_or_else(AttributeValue::default, AttributeValue::Text)
        }
        None => AttributeValue::default(),
    }
}
