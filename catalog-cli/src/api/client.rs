//! HTTP client wrapper: JSON writes with status checking, plain deletes

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;

use super::constants::{APPLICATION_JSON, CONTENT_TYPE};
use super::error::ApiError;

/// Where and how to send a payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestConfig {
    pub url: String,
    /// "POST" or "PUT" (any case); other methods are rejected at send time
    pub method: String,
    pub headers: Vec<(String, String)>,
    /// (user, password)
    pub basic_auth: Option<(String, Option<String>)>,
}

impl RequestConfig {
    /// POST with a JSON content type
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: "POST".to_string(),
            headers: vec![(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())],
            basic_auth: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Add a header, replacing any existing one with the same name (any case)
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
        self
    }

    pub fn basic_auth(mut self, user: impl Into<String>, password: Option<String>) -> Self {
        self.basic_auth = Some((user.into(), password));
        self
    }
}

/// Status and raw body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    /// `None` when the body was empty
    pub body: Option<String>,
}

impl ApiResponse {
    async fn read(response: reqwest::Response) -> Result<Self, reqwest::Error> {
        let status = response.status().as_u16();
        let text = response.text().await?;
        Ok(Self {
            status,
            body: if text.is_empty() { None } else { Some(text) },
        })
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Thin reqwest wrapper shared by the catalog and generic endpoint clients
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { http })
    }

    /// Send a JSON payload with POST or PUT
    ///
    /// Any non-2xx answer becomes `ApiError::Status` carrying the body.
    pub async fn send(&self, config: &RequestConfig, payload: &Value) -> Result<ApiResponse, ApiError> {
        let builder = match config.method.trim().to_ascii_uppercase().as_str() {
            "POST" => self.http.post(&config.url),
            "PUT" => self.http.put(&config.url),
            _ => return Err(ApiError::UnsupportedMethod(config.method.clone())),
        };

        let mut builder = builder.headers(header_map(&config.headers)?).json(payload);
        if let Some((user, password)) = &config.basic_auth {
            builder = builder.basic_auth(user, password.as_ref());
        }

        log::debug!("{} {}", config.method, config.url);
        let response = match builder.send().await {
            Ok(response) => ApiResponse::read(response).await?,
            Err(e) => {
                log::error!("API request failed: {}", e);
                return Err(e.into());
            }
        };

        if !response.is_success() {
            log::error!(
                "API request to {} failed with status {}: {}",
                config.url,
                response.status,
                response.body.as_deref().unwrap_or("")
            );
            return Err(ApiError::Status {
                status: response.status,
                url: config.url.clone(),
                body: response.body,
            });
        }

        log::info!("Successfully sent data to API. Status: {}", response.status);
        Ok(response)
    }

    /// Issue a DELETE. Any HTTP answer is returned as-is; only transport
    /// failures are errors.
    pub async fn delete(&self, url: &str, headers: &[(String, String)]) -> Result<ApiResponse, ApiError> {
        log::debug!("DELETE {}", url);
        let response = self.http.delete(url).headers(header_map(headers)?).send().await?;
        Ok(ApiResponse::read(response).await?)
    }
}

fn header_map(headers: &[(String, String)]) -> Result<HeaderMap, ApiError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let invalid = |reason: String| ApiError::InvalidHeader {
            name: name.clone(),
            reason,
        };
        let key = HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
        let val = HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
        map.insert(key, val);
    }
    Ok(map)
}

#[cfg(test)]
pub(crate) mod stub {
    //! One-shot HTTP server on a local port for client tests

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    /// Serve a single response; the handle yields the raw request text
    pub async fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });
        (format!("http://{}", addr), handle)
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let body_len = head
                    .lines()
                    .find_map(|l| l.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + body_len {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> ApiClient {
        ApiClient::new(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_send_post_success() {
        let (base, server) = stub::serve_once(201, r#"{"id":42}"#).await;
        let config = RequestConfig::new(format!("{}/items", base)).header("X-Trace", "t-1");

        let response = client().send(&config, &json!({"name": "A"})).await.unwrap();
        assert_eq!(response.status, 201);
        assert_eq!(response.body.as_deref(), Some(r#"{"id":42}"#));

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /items HTTP/1.1"));
        let lowered = request.to_lowercase();
        assert!(lowered.contains("x-trace: t-1"));
        assert!(lowered.contains("content-type: application/json"));
        assert!(request.ends_with(r#"{"name":"A"}"#));
    }

    #[tokio::test]
    async fn test_send_put_with_basic_auth() {
        let (base, server) = stub::serve_once(200, "").await;
        let config = RequestConfig::new(base)
            .method("put")
            .basic_auth("user", Some("pass".into()));

        let response = client().send(&config, &json!({})).await.unwrap();
        assert_eq!(response.body, None);

        let request = server.await.unwrap();
        assert!(request.starts_with("PUT / HTTP/1.1"));
        // base64("user:pass")
        assert!(request.to_lowercase().contains("authorization: basic dxnlcjpwyxnz"));
    }

    #[tokio::test]
    async fn test_non_success_status_carries_body() {
        let (base, server) = stub::serve_once(400, r#"{"message":"duplicate code"}"#).await;
        let config = RequestConfig::new(base);

        let err = client().send(&config, &json!({})).await.unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.body(), Some(r#"{"message":"duplicate code"}"#));
        assert!(matches!(err, ApiError::Status { .. }));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unsupported_method_is_rejected_before_sending() {
        // Nothing listens here; a network attempt would be a transport error
        for method in ["DELETE", "GET", "PATCH"] {
            let config = RequestConfig::new("http://127.0.0.1:9/").method(method);
            let err = client().send(&config, &json!({})).await.unwrap_err();
            assert!(matches!(err, ApiError::UnsupportedMethod(ref m) if m == method));
            assert_eq!(err.to_string(), format!("Unsupported HTTP method: {}", method));
        }
    }

    #[tokio::test]
    async fn test_invalid_header_is_rejected() {
        let config = RequestConfig::new("http://127.0.0.1:9/").header("bad header", "x");
        let err = client().send(&config, &json!({})).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidHeader { .. }));
    }

    #[tokio::test]
    async fn test_delete_returns_any_status() {
        let (base, server) = stub::serve_once(404, r#"{"message":"not found"}"#).await;
        let response = client()
            .delete(&format!("{}/product/9", base), &[])
            .await
            .unwrap();
        assert_eq!(response.status, 404);
        assert!(!response.is_success());

        let request = server.await.unwrap();
        assert!(request.starts_with("DELETE /product/9 HTTP/1.1"));
    }

    #[test]
    fn test_header_replaces_case_insensitively() {
        let config = RequestConfig::new("u").header("content-type", "text/plain");
        assert_eq!(config.headers, vec![("content-type".to_string(), "text/plain".to_string())]);
    }
}
