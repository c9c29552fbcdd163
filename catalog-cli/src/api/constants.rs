//! Catalog service endpoints and the fixed request headers it expects

/// Base URL of the private catalog service
pub const DEFAULT_BASE_URL: &str =
    "https://api-bcss-private.vnsky.vn/catalog-service/private/api/v1";

/// Product collection path under the base URL
pub const PRODUCT_PATH: &str = "product";

/// Request timeout when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";
pub const AUTHORIZATION: &str = "authorization";

/// Browser headers the catalog gateway checks on every request
pub const BROWSER_HEADERS: &[(&str, &str)] = &[
    ("accept", "*"),
    ("accept-language", "vi-VN"),
    ("origin", "https://bcss.vnsky.vn"),
    ("priority", "u=1, i"),
    ("referer", "https://bcss.vnsky.vn/"),
    (
        "sec-ch-ua",
        "\"Chromium\";v=\"136\", \"Google Chrome\";v=\"136\", \"Not.A/Brand\";v=\"99\"",
    ),
    ("sec-ch-ua-mobile", "?0"),
    ("sec-ch-ua-platform", "\"Windows\""),
    ("sec-fetch-dest", "empty"),
    ("sec-fetch-mode", "cors"),
    ("sec-fetch-site", "same-site"),
    (
        "user-agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/136.0.0.0 Safari/537.36",
    ),
];

/// Full header set for a catalog request
///
/// Writes carry a JSON content type; deletes do not.
pub fn catalog_headers(token: &str, with_body: bool) -> Vec<(String, String)> {
    let mut headers: Vec<(String, String)> = BROWSER_HEADERS
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    headers.push((AUTHORIZATION.to_string(), format!("Bearer {}", token)));
    if with_body {
        headers.push((CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string()));
    }
    headers
}
