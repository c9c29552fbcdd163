//! HTTP access to the product catalog service

pub mod catalog;
pub mod client;
pub mod constants;
pub mod error;
pub mod operations;

pub use catalog::{CatalogApi, CatalogClient, EndpointClient};
pub use client::RequestConfig;
pub use operations::Operation;
