//! Row transforms: product rows to catalog payloads

mod areas;
mod attributes;
mod columns;
mod engine;
mod normalize;
mod product_code;

pub use columns::ColumnMapper;
pub use engine::{CatalogMapper, FIXED_TEXT_NOTE, RowMapper};
