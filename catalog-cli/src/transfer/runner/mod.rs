//! Sequential batch processing with per-record outcomes

mod batch;
mod delete;
pub mod report;

pub use batch::{RunOptions, create_single, run};
pub use delete::delete_range;
pub use report::ConsoleReporter;
