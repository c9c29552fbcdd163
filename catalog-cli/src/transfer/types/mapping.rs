//! Mapping configuration: catalog field -> spreadsheet column -> note

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One row of the mapping configuration sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    /// Catalog field label (e.g. "Tên sản phẩm")
    pub target_field: String,
    /// Column in the product sheet, or a fixed literal for sentinel rows
    pub source_column: Option<String>,
    /// Free-text note; drives "Text cố định" and "support = có" handling
    pub note: Option<String>,
}

impl MappingEntry {
    #[cfg(test)]
    pub fn new(
        target_field: impl Into<String>,
        source_column: Option<&str>,
        note: Option<&str>,
    ) -> Self {
        Self {
            target_field: target_field.into(),
            source_column: source_column.map(str::to_string),
            note: note.map(str::to_string),
        }
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

/// Mapping entries keyed by target field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MappingTable {
    entries: HashMap<String, MappingEntry>,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the one it replaced (same target field)
    pub fn insert(&mut self, entry: MappingEntry) -> Option<MappingEntry> {
        self.entries.insert(entry.target_field.clone(), entry)
    }

    pub fn get(&self, target_field: &str) -> Option<&MappingEntry> {
        self.entries.get(target_field)
    }

    /// Source column configured for a field, if both exist
    pub fn source_column(&self, target_field: &str) -> Option<&str> {
        self.get(target_field)
            .and_then(|e| e.source_column.as_deref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by target field, for stable display
    pub fn entries_sorted(&self) -> Vec<&MappingEntry> {
        let mut entries: Vec<_> = self.entries.values().collect();
        entries.sort_by(|a, b| a.target_field.cmp(&b.target_field));
        entries
    }
}

impl FromIterator<MappingEntry> for MappingTable {
    fn from_iter<I: IntoIterator<Item = MappingEntry>>(iter: I) -> Self {
        let mut table = MappingTable::new();
        for entry in iter {
            table.insert(entry);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_entry_replaces_earlier() {
        let mut table = MappingTable::new();
        assert!(table.insert(MappingEntry::new("VAT", Some("8"), None)).is_none());
        let replaced = table.insert(MappingEntry::new("VAT", Some("10"), Some("Text cố định")));

        assert_eq!(replaced.and_then(|e| e.source_column), Some("8".to_string()));
        assert_eq!(table.len(), 1);
        assert_eq!(table.source_column("VAT"), Some("10"));
        assert_eq!(table.get("VAT").and_then(|e| e.note()), Some("Text cố định"));
    }

    #[test]
    fn test_lookup_without_source_column() {
        let table: MappingTable = [
            MappingEntry::new("Loại sản phẩm", None, None),
            MappingEntry::new("Days", Some("Days"), None),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.source_column("Loại sản phẩm"), None);
        assert_eq!(table.source_column("Missing"), None);
        let fields: Vec<_> = table.entries_sorted().iter().map(|e| e.target_field.as_str()).collect();
        assert_eq!(fields, vec!["Days", "Loại sản phẩm"]);
    }
}
