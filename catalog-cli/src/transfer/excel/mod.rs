//! Spreadsheet I/O: product sheets in, mapping configuration in and out

mod loader;
pub mod mapping;
mod values;

pub use loader::{load_sheet, sheet_names};
pub use mapping::{read_mapping, write_default_mapping};
