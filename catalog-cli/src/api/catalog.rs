//! Catalog service clients behind the `CatalogApi` seam

use std::time::Duration;

use anyhow::{Result, bail};
use async_trait::async_trait;

use super::client::{ApiClient, ApiResponse, RequestConfig};
use super::constants::{CONTENT_TYPE, catalog_headers};
use super::error::ApiError;
use super::operations::Operation;

/// Something that can execute catalog operations
///
/// The batch runner only talks to this trait, so tests can drive it with a fake.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn execute(&self, operation: &Operation) -> Result<ApiResponse, ApiError>;
}

/// Client for the catalog service, authenticated with a bearer token
#[derive(Debug, Clone)]
pub struct CatalogClient {
    api: ApiClient,
    base_url: String,
    token: String,
}

impl CatalogClient {
    pub fn new(base_url: &str, token: &str, timeout: Duration) -> Result<Self> {
        if token.trim().is_empty() {
            bail!("A bearer token is required for the catalog API");
        }
        Ok(Self {
            api: ApiClient::new(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.trim().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, operation: &Operation) -> String {
        format!("{}/{}", self.base_url, operation.path())
    }

    /// Request settings for a write operation
    pub fn request_config(&self, operation: &Operation) -> RequestConfig {
        RequestConfig {
            url: self.url_for(operation),
            method: operation.http_method().to_string(),
            headers: catalog_headers(&self.token, true),
            basic_auth: None,
        }
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn execute(&self, operation: &Operation) -> Result<ApiResponse, ApiError> {
        match operation.payload() {
            Some(payload) => {
                self.api
                    .send(&self.request_config(operation), payload)
                    .await
            }
            None => {
                self.api
                    .delete(&self.url_for(operation), &catalog_headers(&self.token, false))
                    .await
            }
        }
    }
}

/// Client for an arbitrary JSON endpoint described by a `RequestConfig`
///
/// Creates use the configured method, updates use PUT, and deletes go to
/// `{url}/{id}` with the configured headers minus the content type.
#[derive(Debug, Clone)]
pub struct EndpointClient {
    api: ApiClient,
    config: RequestConfig,
}

impl EndpointClient {
    pub fn new(config: RequestConfig, timeout: Duration) -> Result<Self> {
        Ok(Self {
            api: ApiClient::new(timeout)?,
            config,
        })
    }
}

#[async_trait]
impl CatalogApi for EndpointClient {
    async fn execute(&self, operation: &Operation) -> Result<ApiResponse, ApiError> {
        match operation {
            Operation::CreateProduct { payload } => self.api.send(&self.config, payload).await,
            Operation::UpdateProduct { payload } => {
                let config = self.config.clone().method("PUT");
                self.api.send(&config, payload).await
            }
            Operation::DeleteProduct { id } => {
                let url = format!("{}/{}", self.config.url.trim_end_matches('/'), id);
                let headers: Vec<(String, String)> = self
                    .config
                    .headers
                    .iter()
                    .filter(|(k, _)| !k.eq_ignore_ascii_case(CONTENT_TYPE))
                    .cloned()
                    .collect();
                self.api.delete(&url, &headers).await
            }
        }
    }
}
