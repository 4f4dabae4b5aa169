//! Cached access to remote documents
//!
//! Lookup order for every key:
//! 1. fresh cache entry
//! 2. live fetch (stored in the cache on success)
//! 3. stale cache entry, if the live fetch failed
//!
//! Only when all three come up empty is an error returned.

use crate::cache::TtlCache;
use crate::config::schema::FetchConfig;
use crate::error::{DocsError, DocsResult};
use crate::fetch::Fetcher;
use crate::version;
use std::sync::Arc;
use tracing::{debug, warn};

/// Fragment and schema fetching through the shared cache
pub struct DocSource {
    fetcher: Arc<dyn Fetcher>,
    cache: TtlCache<String>,
    fetch_config: FetchConfig,
}

impl DocSource {
    pub fn new(fetcher: Arc<dyn Fetcher>, cache: TtlCache<String>) -> Self {
        Self {
            fetcher,
            cache,
            fetch_config: FetchConfig::default(),
        }
    }

    pub fn with_fetch_config(mut self, fetch_config: FetchConfig) -> Self {
        self.fetch_config = fetch_config;
        self
    }

    /// Override where schemas are fetched from; `{version}` is substituted
    pub fn with_schema_url_template(mut self, template: impl Into<String>) -> Self {
        self.fetch_config.schema_url_template = template.into();
        self
    }

    pub fn cache(&self) -> &TtlCache<String> {
        &self.cache
    }

    /// Fetch one documentation fragment
    pub async fn fragment(&self, locator: &str) -> DocsResult<String> {
        self.cached(locator, locator, Ok)
            .await
            .map_err(|reason| DocsError::fetch(locator, reason))
    }

    /// Fetch the JSON schema for a version, pretty-printed
    ///
    /// The version is validated strictly: an unsupported one is an error
    /// rather than a fallback to the default.
    pub async fn schema(&self, version: &str) -> DocsResult<String> {
        let version = version::validate(version)?;
        let url = self.fetch_config.schema_url(version.as_str());
        let key = format!("schema:{}", version);

        self.cached(&key, &url, |body| {
            serde_json::from_str::<serde_json::Value>(&body)
                .and_then(|value| serde_json::to_string_pretty(&value))
                .map_err(|e| format!("invalid schema JSON: {}", e))
        })
        .await
        .map_err(|reason| DocsError::SchemaFetch {
            version: version.to_string(),
            reason,
        })
    }

    async fn cached<F>(&self, key: &str, locator: &str, parse: F) -> Result<String, String>
    where
        F: FnOnce(String) -> Result<String, String>,
    {
        if let Some(hit) = self.cache.get(key) {
            debug!("Cache hit: {}", key);
            return Ok(hit);
        }

        debug!("Cache miss: {}", key);
        let reason = match self.fetcher.fetch(locator).await.into_result().and_then(parse) {
            Ok(value) => {
                self.cache.set(key, value.clone());
                return Ok(value);
            }
            Err(reason) => reason,
        };

        match self.cache.get_stale(key) {
            Some(stale) => {
                warn!("Fetching {} failed ({}), serving stale copy", locator, reason);
                Ok(stale)
            }
            None => {
                warn!("Fetching {} failed: {}", locator, reason);
                Err(reason)
            }
        }
    }
}
