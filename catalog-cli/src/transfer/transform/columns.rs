//! Generic column mapper: spreadsheet column -> JSON field, one to one

use anyhow::Result;
use serde_json::{Map, Value};

use crate::transfer::ProductRow;

use super::engine::RowMapper;

/// Maps sheet columns straight onto request fields
///
/// Empty cells become `null`. Columns missing from a row are skipped with a
/// warning, so a request may carry fewer fields than configured.
#[derive(Debug, Clone, Default)]
pub struct ColumnMapper {
    /// (sheet column, api field) in configured order
    columns: Vec<(String, String)>,
    key_field: Option<String>,
}

impl ColumnMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from (column, field) pairs. A repeated column keeps its last field.
    pub fn from_pairs<C, F>(pairs: impl IntoIterator<Item = (C, F)>) -> Self
    where
        C: Into<String>,
        F: Into<String>,
    {
        let mut mapper = Self::new();
        for (column, field) in pairs {
            mapper.map_column(column, field);
        }
        mapper
    }

    pub fn map_column(&mut self, column: impl Into<String>, field: impl Into<String>) {
        let column = column.into();
        let field = field.into();
        match self.columns.iter_mut().find(|(c, _)| *c == column) {
            Some((_, existing)) => *existing = field,
            None => self.columns.push((column, field)),
        }
    }

    /// Field whose value identifies a record in reports
    pub fn with_key_field(mut self, field: impl Into<String>) -> Self {
        self.key_field = Some(field.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }
}

impl RowMapper for ColumnMapper {
    fn map_row(&self, row: &ProductRow) -> Result<Value> {
        let mut body = Map::new();
        for (column, field) in &self.columns {
            match row.get(column) {
                Some(cell) => {
                    body.insert(field.clone(), cell.to_json());
                }
                None => log::warn!("Column '{}' not found in data", column),
            }
        }
        Ok(Value::Object(body))
    }

    fn record_key(&self, payload: &Value) -> Option<String> {
        let field = self.key_field.as_deref()?;
        match payload.get(field)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer::CellValue;
    use serde_json::json;

    #[test]
    fn test_maps_columns_and_nulls_empty_cells() {
        let mapper = ColumnMapper::from_pairs([
            ("Product Name", "name"),
            ("Price", "price"),
            ("Description", "description"),
        ]);
        let row = ProductRow::from_pairs([
            ("Product Name", CellValue::from("Product A")),
            ("Price", CellValue::Float(10.5)),
            ("Description", CellValue::Empty),
        ]);

        let body = mapper.map_row(&row).unwrap();
        assert_eq!(
            body,
            json!({"name": "Product A", "price": 10.5, "description": null})
        );
    }

    #[test]
    fn test_missing_column_is_skipped() {
        let mapper = ColumnMapper::from_pairs([("Name", "name"), ("Nonexistent", "missing")]);
        let row = ProductRow::from_pairs([("Name", "Test")]);

        let body = mapper.map_row(&row).unwrap();
        assert_eq!(body, json!({"name": "Test"}));
    }

    #[test]
    fn test_repeated_column_keeps_last_field() {
        let mapper = ColumnMapper::from_pairs([("Name", "name"), ("Name", "title")]);
        assert_eq!(mapper.len(), 1);
        let body = mapper.map_row(&ProductRow::from_pairs([("Name", "X")])).unwrap();
        assert_eq!(body, json!({"title": "X"}));
    }

    #[test]
    fn test_record_key() {
        let mapper = ColumnMapper::from_pairs([("Code", "code")]).with_key_field("code");
        assert_eq!(mapper.record_key(&json!({"code": "P-1"})).as_deref(), Some("P-1"));
        assert_eq!(mapper.record_key(&json!({"code": 7})).as_deref(), Some("7"));
        assert_eq!(mapper.record_key(&json!({"code": null})), None);
        assert_eq!(ColumnMapper::new().record_key(&json!({"code": "P-1"})), None);
    }
}
