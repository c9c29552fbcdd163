//! Product data rows keyed by column header

use serde::Serialize;

use super::CellValue;

/// One input record: column header -> raw cell value, in sheet column order
///
/// Column order matters: fuzzy column lookups take the first match.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductRow {
    cells: Vec<(String, CellValue)>,
}

impl ProductRow {
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Build a row from (column, value) pairs, keeping their order
    #[cfg(test)]
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<CellValue>,
    {
        let mut row = Self::new();
        for (k, v) in pairs {
            row.push(k, v);
        }
        row
    }

    /// Append a cell. A repeated header replaces the earlier value in place.
    pub fn push(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        let column = column.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(c, _)| *c == column) {
            Some((_, existing)) => *existing = value,
            None => self.cells.push((column, value)),
        }
    }

    /// Exact column lookup
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v)
    }

    /// Column headers in sheet order
    #[cfg(test)]
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(c, _)| c.as_str())
    }

    /// (column, value) pairs in sheet order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(c, v)| (c.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True when every cell is blank
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|(_, v)| v.is_blank())
    }

    /// Convert to a JSON object
    pub fn to_json(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .cells
            .iter()
            .map(|(c, v)| (c.clone(), v.to_json()))
            .collect();
        serde_json::Value::Object(map)
    }
}
