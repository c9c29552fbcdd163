//! Catalog loading: spreadsheet rows to product payloads to API calls
//!
//! Rows are read from a product sheet, mapped to catalog payloads with a
//! mapping configuration, and sent one at a time by the batch runner.

pub mod types;
pub mod transform;
pub mod excel;
pub mod runner;

pub use types::*;
pub use transform::{CatalogMapper, ColumnMapper, FIXED_TEXT_NOTE, RowMapper};
pub use excel::{load_sheet, read_mapping, sheet_names, write_default_mapping};
