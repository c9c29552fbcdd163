//! Core types for catalog loading

mod value;
mod row;
mod mapping;
mod payload;
mod result;

pub use value::*;
pub use row::*;
pub use mapping::*;
pub use payload::*;
pub use result::*;
