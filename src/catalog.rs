//! Locator catalog and named sections
//!
//! The catalog is the flat list of documentation locators every section is
//! filtered from. A built-in list is compiled into the binary; a file named
//! in the config replaces it.

use crate::config::Config;
use crate::error::{DocsError, DocsResult};
use crate::section::SectionSpec;
use std::path::Path;
use tokio::fs;
use tracing::debug;

const BUILTIN_LOCATORS: &str = include_str!("../catalog/locators.txt");

/// Sections assembled by complete composition, in output order
pub const COMPLETE_SECTIONS: &[&str] = &[
    "architecture",
    "base-protocol",
    "utilities",
    "client",
    "server",
    "server-utilities",
];

/// Every section name and the string form of its spec
const SECTION_SPECS: &[(&str, &str)] = &[
    ("overview", crate::section::SHALLOW_DOC_MARKER),
    ("sdks", crate::section::NAMESPACE_ROOT_MARKER),
    ("architecture", "/architecture/"),
    ("base-protocol", r"^(lifecycle|transports|authorization)\.md$"),
    ("utilities", "/basic/utilities/"),
    ("client", "/client/"),
    ("server", r"^(prompts|resources|tools)\.md$"),
    ("server-utilities", "/server/utilities/"),
];

/// A named, parsed section
#[derive(Debug, Clone)]
pub struct NamedSection {
    pub name: &'static str,
    pub spec: SectionSpec,
}

impl NamedSection {
    /// Human-readable title, e.g. `server-utilities` -> `Server Utilities`
    pub fn title(&self) -> String {
        crate::compose::humanize(self.name)
    }
}

/// Loaded locators plus the section registry
#[derive(Debug, Clone)]
pub struct Catalog {
    locators: Vec<String>,
    sections: Vec<NamedSection>,
}

impl Catalog {
    /// Catalog built from the compiled-in locator list
    pub fn builtin() -> DocsResult<Self> {
        Self::from_locators(parse_locators(BUILTIN_LOCATORS))
    }

    /// Catalog over an explicit locator list
    pub fn from_locators(locators: Vec<String>) -> DocsResult<Self> {
        let sections = SECTION_SPECS
            .iter()
            .map(|&(name, spec)| {
                Ok(NamedSection {
                    name,
                    spec: SectionSpec::parse(spec)?,
                })
            })
            .collect::<DocsResult<Vec<_>>>()?;

        Ok(Self { locators, sections })
    }

    /// Load the catalog named by the config, or the built-in one
    pub async fn load(config: &Config) -> DocsResult<Self> {
        match config.catalog.path.as_deref() {
            Some(path) => Self::from_file(path).await,
            None => Self::builtin(),
        }
    }

    /// Load locators from a file, one per line
    pub async fn from_file(path: &Path) -> DocsResult<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| DocsError::io(format!("reading catalog {}", path.display()), e))?;

        let locators = parse_locators(&content);
        debug!("Loaded {} locators from {}", locators.len(), path.display());
        Self::from_locators(locators)
    }

    pub fn locators(&self) -> &[String] {
        &self.locators
    }

    pub fn sections(&self) -> &[NamedSection] {
        &self.sections
    }

    /// Look up a section by name
    pub fn section(&self, name: &str) -> DocsResult<&NamedSection> {
        self.sections
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| DocsError::UnknownSection {
                name: name.to_string(),
                available: self.sections.iter().map(|s| s.name.to_string()).collect(),
            })
    }
}

fn parse_locators(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
