//! Request entry points
//!
//! `DocsService` is what a dispatcher talks to. It decides, per entry
//! point, whether an unsupported version degrades to the default or is
//! rejected:
//!
//! | Entry point | Version handling |
//! |-------------|------------------|
//! | `section`, `complete`, `read` | soft, falls back to the default |
//! | `schema`, complete's schema block | strict, `UnsupportedVersion` |

use crate::cache::{Clock, SystemClock, TtlCache};
use crate::catalog::Catalog;
use crate::compose::DocumentComposer;
use crate::config::Config;
use crate::error::{DocsError, DocsResult};
use crate::fetch::{DocSource, Fetcher, HttpFetcher};
use crate::version::{self, Version};
use chrono::Duration;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// URI scheme of template resources
pub const RESOURCE_SCHEME: &str = "mcp-docs://";

/// Pseudo-section name that selects complete composition
pub const COMPLETE: &str = "complete";

pub const MIME_MARKDOWN: &str = "text/markdown";
pub const MIME_JSON: &str = "application/json";

/// A served document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub uri: String,
    pub mime_type: &'static str,
    pub text: String,
}

/// Facade over version resolution, filtering and composition
pub struct DocsService {
    source: Arc<DocSource>,
    catalog: Arc<Catalog>,
    composer: DocumentComposer,
}

impl DocsService {
    /// Wire up a service with an explicit fetcher and clock
    pub fn new(
        config: &Config,
        catalog: Catalog,
        fetcher: Arc<dyn Fetcher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let ttl = Duration::seconds(config.cache.ttl_secs.min(u64::from(u32::MAX)) as i64);
        let cache = TtlCache::with_clock(ttl, clock);
        let source = Arc::new(DocSource::new(fetcher, cache).with_fetch_config(config.fetch.clone()));
        let catalog = Arc::new(catalog);

        Self {
            composer: DocumentComposer::new(source.clone(), catalog.clone()),
            source,
            catalog,
        }
    }

    /// Production wiring: HTTP fetcher, wall clock, catalog from config
    pub async fn from_config(config: &Config) -> DocsResult<Self> {
        let catalog = Catalog::load(config).await?;
        let fetcher = Arc::new(HttpFetcher::new(&config.fetch));
        Ok(Self::new(config, catalog, fetcher, Arc::new(SystemClock)))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// One named section
    pub async fn section(&self, version: Option<&str>, name: &str) -> DocsResult<Resource> {
        self.section_for(version::resolve(version), name).await
    }

    /// Schema plus every section
    pub async fn complete(&self, version: Option<&str>) -> DocsResult<Resource> {
        self.complete_for(version::resolve(version)).await
    }

    /// The JSON schema of one version
    pub async fn schema(&self, version: &str) -> DocsResult<Resource> {
        let text = self.source.schema(version).await?;
        Ok(Resource {
            uri: resource_uri(version, "schema"),
            mime_type: MIME_JSON,
            text,
        })
    }

    /// Resolve a resource URI of the form
    /// `mcp-docs://specification/{version}/{section}`
    ///
    /// An unsupported version in the URI degrades to the default.
    pub async fn read(&self, uri: &str) -> DocsResult<Resource> {
        let unknown = || DocsError::UnknownLocator(uri.to_string());
        let rest = uri.strip_prefix(RESOURCE_SCHEME).ok_or_else(unknown)?;

        let name = match rest.split('/').collect::<Vec<_>>().as_slice() {
            [anchor, version, name]
                if *anchor == version::VERSION_ANCHOR && !version.is_empty() && !name.is_empty() =>
            {
                *name
            }
            _ => return Err(unknown()),
        };

        let version = version::extract_from_locator(uri, false)?;
        debug!("Reading resource {} (version {}, section {})", uri, version, name);
        self.section_for(version, name).await
    }

    async fn section_for(&self, version: Version, name: &str) -> DocsResult<Resource> {
        if name == COMPLETE {
            return self.complete_for(version).await;
        }

        let doc = self.composer.compose_named_section(name, version).await?;
        Ok(Resource {
            uri: resource_uri(version, name),
            mime_type: MIME_MARKDOWN,
            text: doc.content,
        })
    }

    async fn complete_for(&self, version: Version) -> DocsResult<Resource> {
        let doc = self.composer.compose_complete(version).await?;
        Ok(Resource {
            uri: resource_uri(version, COMPLETE),
            mime_type: MIME_MARKDOWN,
            text: doc.render(),
        })
    }
}

fn resource_uri(version: impl std::fmt::Display, name: &str) -> String {
    format!(
        "{}{}/{}/{}",
        RESOURCE_SCHEME,
        version::VERSION_ANCHOR,
        version,
        name
    )
}
