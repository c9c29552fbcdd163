//! Subcommands, one module each: arguments in `mod.rs`, logic in `handler.rs`

pub mod delete;
pub mod import;
pub mod init_mapping;
pub mod inspect;
pub mod product;
pub mod send;
