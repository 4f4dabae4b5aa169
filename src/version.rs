//! Protocol version resolution
//!
//! Two strengths of resolution exist. [`resolve`] degrades an unknown
//! version to [`Version::default_version`] with a warning; [`validate`]
//! rejects it with the list of supported versions.

use crate::error::{DocsError, DocsResult};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Every version the catalog carries, oldest first
pub const SUPPORTED_VERSIONS: &[&str] = &["2024-11-05", "2025-03-26", "draft"];

/// Version served when none (or an unknown one) is requested
pub const DEFAULT_VERSION: &str = "2025-03-26";

/// Path segment that precedes the version in specification locators
pub const VERSION_ANCHOR: &str = "specification";

/// A supported protocol version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version(&'static str);

impl Version {
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn default_version() -> Self {
        Self(DEFAULT_VERSION)
    }

    /// All supported versions, oldest first
    pub fn all() -> impl Iterator<Item = Version> {
        SUPPORTED_VERSIONS.iter().map(|v| Version(*v))
    }

    fn lookup(candidate: &str) -> Option<Self> {
        SUPPORTED_VERSIONS
            .iter()
            .find(|v| **v == candidate)
            .map(|v| Version(*v))
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::default_version()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl FromStr for Version {
    type Err = DocsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)
    }
}

/// Resolve an optional version, falling back to the default when it is
/// absent or unsupported
pub fn resolve(candidate: Option<&str>) -> Version {
    match candidate {
        None => Version::default_version(),
        Some(v) => Version::lookup(v).unwrap_or_else(|| {
            warn!(
                "Unsupported version '{}', falling back to {}",
                v, DEFAULT_VERSION
            );
            Version::default_version()
        }),
    }
}

/// Accept only supported versions
pub fn validate(candidate: &str) -> DocsResult<Version> {
    Version::lookup(candidate).ok_or_else(|| DocsError::UnsupportedVersion {
        requested: candidate.to_string(),
        supported: SUPPORTED_VERSIONS.iter().map(|v| v.to_string()).collect(),
    })
}

/// Read the version segment that follows [`VERSION_ANCHOR`] in a locator.
///
/// A missing segment always yields the default. A present but unsupported
/// segment yields the default unless `strict` is set, in which case it is
/// rejected through [`validate`].
pub fn extract_from_locator(locator: &str, strict: bool) -> DocsResult<Version> {
    let mut segments = locator.split('/').filter(|s| !s.is_empty());
    let found = segments
        .by_ref()
        .find(|s| *s == VERSION_ANCHOR)
        .and_then(|_| segments.next());

    match found {
        None => Ok(Version::default_version()),
        Some(segment) if strict => validate(segment),
        Some(segment) => Ok(resolve(Some(segment))),
    }
}

/// Whether a path segment names a supported version (`draft` included).
///
/// Other date-shaped segments are ordinary path text, so a dated page that
/// belongs to no version stays visible under every version.
pub fn is_version_segment(segment: &str) -> bool {
    Version::lookup(segment).is_some()
}
