//! Configuration: config file, then environment, then command-line flags
//!
//! The file lives at `<config dir>/catalog-loader/config.toml`. Environment
//! variables (also read from a `.env` file) override it:
//! `CATALOG_BASE_URL`, `CATALOG_TOKEN`, `CATALOG_TIMEOUT_SECS`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::api::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

pub const ENV_BASE_URL: &str = "CATALOG_BASE_URL";
pub const ENV_TOKEN: &str = "CATALOG_TOKEN";
pub const ENV_TIMEOUT_SECS: &str = "CATALOG_TIMEOUT_SECS";

const APP_DIR: &str = "catalog-loader";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog service base URL (without the `/product` suffix)
    pub base_url: String,
    /// Bearer token; required for live runs
    pub token: Option<String>,
    pub timeout_secs: u64,
    /// Mapping workbook used when `--mapping` is not given
    pub mapping_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            mapping_file: None,
        }
    }
}

/// Default location of the config file
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILENAME)
}

impl Config {
    /// Load from the default file (if present) and the process environment
    pub fn load() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("Loaded environment from {}", path.display());
        }

        let path = config_path();
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Self::default()
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Overlay environment values; `lookup` returns a variable's value
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty(ENV_BASE_URL) {
            self.base_url = url;
        }
        if let Some(token) = non_empty(ENV_TOKEN) {
            self.token = Some(token);
        }
        if let Some(secs) = non_empty(ENV_TIMEOUT_SECS) {
            self.timeout_secs = secs
                .trim()
                .parse()
                .with_context(|| format!("{} must be a number of seconds, got '{}'", ENV_TIMEOUT_SECS, secs))?;
        }
        Ok(())
    }

    /// Overlay command-line values
    pub fn apply_overrides(
        &mut self,
        base_url: Option<String>,
        token: Option<String>,
        timeout_secs: Option<u64>,
    ) {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        if let Some(token) = token {
            self.token = Some(token);
        }
        if let Some(secs) = timeout_secs {
            self.timeout_secs = secs;
        }
    }

    /// Request timeout; zero would fail every request, so it means the default
    pub fn timeout(&self) -> Duration {
        if self.timeout_secs == 0 {
            log::warn!(
                "Timeout of 0 seconds is not usable, using {} seconds",
                DEFAULT_TIMEOUT_SECS
            );
            return Duration::from_secs(DEFAULT_TIMEOUT_SECS);
        }
        Duration::from_secs(self.timeout_secs)
    }

    /// Token for live requests
    pub fn require_token(&self) -> Result<&str> {
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .with_context(|| {
                format!(
                    "No API token configured. Set {}, add `token` to {}, or pass --token",
                    ENV_TOKEN,
                    config_path().display()
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.require_token().is_err());
    }

    #[test]
    fn test_file_then_env_then_flags() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "base_url = \"http://file\"\ntoken = \"file-token\"\nmapping_file = \"map.xlsx\"\n",
        )
        .unwrap();

        let mut config = Config::from_file(&path).unwrap();
        assert_eq!(config.base_url, "http://file");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.mapping_file, Some(PathBuf::from("map.xlsx")));

        config
            .apply_env(env(&[(ENV_TOKEN, "env-token"), (ENV_TIMEOUT_SECS, "5"), (ENV_BASE_URL, "")]))
            .unwrap();
        assert_eq!(config.base_url, "http://file");
        assert_eq!(config.require_token().unwrap(), "env-token");
        assert_eq!(config.timeout_secs, 5);

        config.apply_overrides(Some("http://flag".into()), None, Some(60));
        assert_eq!(config.base_url, "http://flag");
        assert_eq!(config.require_token().unwrap(), "env-token");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn test_bad_timeout_is_an_error() {
        let mut config = Config::default();
        let err = config.apply_env(env(&[(ENV_TIMEOUT_SECS, "soon")])).unwrap_err();
        assert!(err.to_string().contains(ENV_TIMEOUT_SECS));
    }

    #[test]
    fn test_zero_timeout_uses_default() {
        let mut config = Config::default();
        config.apply_overrides(None, None, Some(0));
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        config.apply_env(env(&[(ENV_TIMEOUT_SECS, "0")])).unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        config.apply_overrides(None, None, Some(7));
        assert_eq!(config.timeout(), Duration::from_secs(7));
    }

    #[test]
    fn test_blank_token_is_missing() {
        let config = Config {
            token: Some("   ".into()),
            ..Config::default()
        };
        assert!(config.require_token().is_err());
    }

    #[test]
    fn test_bad_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "timeout_secs = \"thirty\"").unwrap();
        assert!(Config::from_file(&path).is_err());
    }
}
