//! Configuration schema for mcp-docs
//!
//! Configuration is stored at `~/.config/mcp-docs/config.toml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default schema location; `{version}` is substituted at fetch time
pub const DEFAULT_SCHEMA_URL_TEMPLATE: &str =
    "https://raw.githubusercontent.com/modelcontextprotocol/modelcontextprotocol/main/schema/{version}/schema.json";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Fragment cache settings
    pub cache: CacheConfig,

    /// Remote fetch settings
    pub fetch: FetchConfig,

    /// Locator catalog settings
    pub catalog: CatalogConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Seconds a fetched fragment is served without refetching
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl_secs: 3600 }
    }
}

/// HTTP fetch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Schema document URL, `{version}` is replaced with the protocol version
    pub schema_url_template: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: format!("mcp-docs/{}", env!("CARGO_PKG_VERSION")),
            schema_url_template: DEFAULT_SCHEMA_URL_TEMPLATE.to_string(),
        }
    }
}

impl FetchConfig {
    /// Schema URL for a concrete version
    pub fn schema_url(&self, version: &str) -> String {
        self.schema_url_template.replace("{version}", version)
    }
}

/// Catalog configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// File with one locator per line; the built-in catalog is used when unset
    pub path: Option<PathBuf>,
}
