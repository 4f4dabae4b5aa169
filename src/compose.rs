//! Document composition
//!
//! Fetches a list of fragments concurrently and merges them, in input
//! order, into one markdown document. Fragment failures are rendered
//! inline; only a missing schema fails complete composition.

use crate::catalog::{Catalog, COMPLETE_SECTIONS};
use crate::error::{DocsError, DocsResult};
use crate::fetch::DocSource;
use crate::section::{self, trailing_segment};
use crate::version::Version;
use futures_util::future::join_all;
use std::sync::Arc;
use tracing::{debug, info};

/// Line that opens and closes a fragment's front-matter block
const METADATA_MARKER: &str = "---";

/// Divider placed before every fragment after the first
const FRAGMENT_DIVIDER: &str = "\n\n---\n\n";

/// One section of a composed document
#[derive(Debug, Clone)]
pub struct SectionDocument {
    pub name: String,
    pub title: String,
    pub locators: Vec<String>,
    pub content: String,
}

/// Schema plus every non-empty section for one version
#[derive(Debug, Clone)]
pub struct CompleteDocument {
    pub version: Version,
    pub schema: String,
    pub sections: Vec<SectionDocument>,
}

impl CompleteDocument {
    /// Render as a single markdown document
    pub fn render(&self) -> String {
        let mut out = format!(
            "# Model Context Protocol Specification ({})\n\n## Schema\n\n```json\n{}\n```\n",
            self.version,
            self.schema.trim_end()
        );
        for section in &self.sections {
            out.push_str(&format!("\n# {}\n\n{}\n", section.title, section.content));
        }
        out
    }
}

/// Builds composite documents from catalog fragments
pub struct DocumentComposer {
    source: Arc<DocSource>,
    catalog: Arc<Catalog>,
}

impl DocumentComposer {
    pub fn new(source: Arc<DocSource>, catalog: Arc<Catalog>) -> Self {
        Self { source, catalog }
    }

    /// Fetch every locator concurrently and join the results positionally.
    ///
    /// The first fragment is emitted as is; each later one is preceded by a
    /// divider and a heading derived from its locator.
    pub async fn compose_section(&self, locators: &[String]) -> String {
        let fragments = join_all(locators.iter().map(|l| self.render_fragment(l))).await;

        let mut out = String::new();
        for (i, (locator, fragment)) in locators.iter().zip(fragments).enumerate() {
            if i > 0 {
                out.push_str(FRAGMENT_DIVIDER);
                out.push_str(&format!("## {}\n\n", fragment_heading(locator)));
            }
            out.push_str(&fragment);
        }
        out
    }

    /// Filter the catalog for a named section and compose it
    pub async fn compose_named_section(
        &self,
        name: &str,
        version: Version,
    ) -> DocsResult<SectionDocument> {
        let section = self.catalog.section(name)?;
        let locators = section::filter(self.catalog.locators(), &section.spec, version);
        debug!(
            "Section {} ({}) selects {} locators for {}",
            name,
            section.spec,
            locators.len(),
            version
        );

        let content = self.compose_section(&locators).await;
        Ok(SectionDocument {
            name: section.name.to_string(),
            title: section.title(),
            locators,
            content,
        })
    }

    /// Schema followed by every non-empty section, sections one at a time
    pub async fn compose_complete(&self, version: Version) -> DocsResult<CompleteDocument> {
        let schema = self.source.schema(version.as_str()).await?;

        let mut sections = Vec::with_capacity(COMPLETE_SECTIONS.len());
        for name in COMPLETE_SECTIONS {
            let section = self.compose_named_section(name, version).await?;
            if section.locators.is_empty() {
                debug!("Section {} is empty for {}, skipping", name, version);
                continue;
            }
            sections.push(section);
        }

        info!(
            "Composed complete document for {} with {} sections",
            version,
            sections.len()
        );
        Ok(CompleteDocument {
            version,
            schema,
            sections,
        })
    }

    async fn render_fragment(&self, locator: &str) -> String {
        match self.source.fragment(locator).await {
            Ok(body) => format!(
                "{}\n\n_Source: {}_",
                strip_metadata(&body).trim_end(),
                locator
            ),
            Err(e) => {
                let reason = match e {
                    DocsError::FetchFailure { reason, .. } => reason,
                    other => other.to_string(),
                };
                format!("> **Error fetching {}**: {}", locator, reason)
            }
        }
    }
}

/// Drop a `---`-delimited block at the very start of a fragment.
///
/// A block without a closing marker is not metadata and is kept.
pub fn strip_metadata(body: &str) -> &str {
    let mut lines = body.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return body;
    };
    if first.trim_end() != METADATA_MARKER {
        return body;
    }

    let mut offset = first.len();
    for line in lines {
        offset += line.len();
        if line.trim_end() == METADATA_MARKER {
            return body[offset..].trim_start_matches(['\r', '\n']);
        }
    }
    body
}

/// Heading for a fragment: its final path segment without the extension,
/// `index` pages read as "Overview"
pub fn fragment_heading(locator: &str) -> String {
    let segment = trailing_segment(locator);
    let stem = segment.rsplit_once('.').map_or(segment, |(stem, _)| stem);
    match stem {
        "index" | "_index" => "Overview".to_string(),
        other => humanize(other),
    }
}

/// `server-utilities` -> `Server Utilities`
pub fn humanize(name: &str) -> String {
    name.split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
