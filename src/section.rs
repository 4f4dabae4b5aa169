//! Section filtering
//!
//! Narrows the catalog to the locators that belong to one logical section
//! of the documentation for one protocol version.

use crate::error::DocsResult;
use crate::version::{is_version_segment, Version};
use regex::Regex;
use std::fmt;

/// Placeholder entry that never names a real source
pub const NOT_A_LOCATOR: &str = "about:blank";

/// Prefix of locators that live under the protocol's GitHub organisation
pub const NAMESPACE_ROOT_PREFIX: &str = "https://github.com/modelcontextprotocol/";

/// String forms of the two special specs, as accepted by [`SectionSpec::parse`]
pub const NAMESPACE_ROOT_MARKER: &str = "@namespace-root";
pub const SHALLOW_DOC_MARKER: &str = "@shallow-doc";

const MARKDOWN_EXTENSION: &str = ".md";

/// How a section selects its locators
#[derive(Debug, Clone)]
pub enum SectionSpec {
    /// Substring anywhere in the locator
    Literal(String),

    /// Regex tested against the final path segment only
    TrailingSegmentRegex(Regex),

    /// Locators under [`NAMESPACE_ROOT_PREFIX`]
    NamespaceRoot,

    /// Markdown pages one segment below the site root
    ShallowDoc,
}

impl SectionSpec {
    /// Parse the string form: a leading `^` makes a trailing-segment regex,
    /// the two markers select the special specs, anything else is literal.
    pub fn parse(spec: &str) -> DocsResult<Self> {
        Ok(match spec {
            NAMESPACE_ROOT_MARKER => Self::NamespaceRoot,
            SHALLOW_DOC_MARKER => Self::ShallowDoc,
            s if s.starts_with('^') => Self::TrailingSegmentRegex(Regex::new(s)?),
            s => Self::Literal(s.to_string()),
        })
    }

    /// Literal spec
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    fn matches(&self, locator: &str) -> bool {
        match self {
            Self::TrailingSegmentRegex(re) => re.is_match(trailing_segment(locator)),
            Self::NamespaceRoot => locator.starts_with(NAMESPACE_ROOT_PREFIX),
            Self::ShallowDoc => {
                let mut segments = path_segments(locator);
                matches!(
                    (segments.next(), segments.next()),
                    (Some(only), None) if only.ends_with(MARKDOWN_EXTENSION)
                )
            }
            Self::Literal(text) => locator.contains(text.as_str()),
        }
    }
}

impl fmt::Display for SectionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => write!(f, "contains {:?}", text),
            Self::TrailingSegmentRegex(re) => write!(f, "last segment matches /{}/", re.as_str()),
            Self::NamespaceRoot => write!(f, "under {}", NAMESPACE_ROOT_PREFIX),
            Self::ShallowDoc => f.write_str("top-level markdown pages"),
        }
    }
}

/// Select the locators belonging to `spec` for `version`, keeping input order.
///
/// Locators that embed a different version segment are dropped before the
/// spec is applied; version-agnostic locators always survive that step.
/// Only supported versions count as segments: a dated path such as
/// `/changelog/2023-01-01/notes.md` is version-agnostic.
/// An empty result means the section has no content for this version.
pub fn filter<S: AsRef<str>>(locators: &[S], spec: &SectionSpec, version: Version) -> Vec<String> {
    locators
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|l| !l.is_empty() && *l != NOT_A_LOCATOR)
        .filter(|l| in_version_scope(l, version))
        .filter(|l| spec.matches(l))
        .map(str::to_string)
        .collect()
}

/// True when the locator carries no version segment or only `version`'s
fn in_version_scope(locator: &str, version: Version) -> bool {
    path_segments(locator)
        .filter(|s| is_version_segment(s))
        .all(|s| s == version.as_str())
}

/// Final `/`-delimited segment of a locator
pub fn trailing_segment(locator: &str) -> &str {
    locator.rsplit('/').next().unwrap_or(locator)
}

/// Non-empty path segments, skipping the scheme and host of absolute URLs
fn path_segments(locator: &str) -> impl Iterator<Item = &str> {
    let path = match locator.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("", |i| &rest[i..]),
        None => locator,
    };
    path.split('/').filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::validate;

    fn v(s: &str) -> Version {
        validate(s).unwrap()
    }

    #[test]
    fn version_scoping_drops_other_versions() {
        let locators = ["/2024-11-05/basic/x", "/2025-03-26/basic/x", "/basic/y"];
        let out = filter(&locators, &SectionSpec::literal("basic"), v("2025-03-26"));
        assert_eq!(out, vec!["/2025-03-26/basic/x", "/basic/y"]);
    }

    #[test]
    fn draft_excluded_unless_requested() {
        let locators = ["/specification/draft/server/tools.md", "/server/tools.md"];
        let out = filter(&locators, &SectionSpec::literal("tools"), v("2025-03-26"));
        assert_eq!(out, vec!["/server/tools.md"]);

        let out = filter(&locators, &SectionSpec::literal("tools"), v("draft"));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn dated_paths_are_not_versions() {
        let changelog = "https://modelcontextprotocol.io/changelog/2023-01-01/notes.md";
        for version in Version::all() {
            let out = filter(&[changelog], &SectionSpec::literal("changelog"), version);
            assert_eq!(out, vec![changelog], "{}", version);
        }
    }

    #[test]
    fn sentinel_and_empty_dropped() {
        let locators = [NOT_A_LOCATOR, "", "https://example.com/a.md"];
        let out = filter(&locators, &SectionSpec::literal(""), v("2025-03-26"));
        assert_eq!(out, vec!["https://example.com/a.md"]);
    }

    #[test]
    fn regex_tests_only_trailing_segment() {
        let spec = SectionSpec::parse("^tools\\.md$").unwrap();
        let locators = [
            "https://example.com/tools.md/server/prompts.md",
            "https://example.com/server/tools.md",
        ];
        let out = filter(&locators, &spec, v("2025-03-26"));
        assert_eq!(out, vec!["https://example.com/server/tools.md"]);
    }

    #[test]
    fn namespace_root_matches_prefix() {
        let spec = SectionSpec::parse(NAMESPACE_ROOT_MARKER).unwrap();
        let locators = [
            "https://github.com/modelcontextprotocol/rust-sdk/README.md",
            "https://github.com/someone-else/modelcontextprotocol/README.md",
        ];
        let out = filter(&locators, &spec, v("2025-03-26"));
        assert_eq!(out, vec!["https://github.com/modelcontextprotocol/rust-sdk/README.md"]);
    }

    #[test]
    fn shallow_doc_needs_one_markdown_segment() {
        let spec = SectionSpec::parse(SHALLOW_DOC_MARKER).unwrap();
        let locators = [
            "https://modelcontextprotocol.io/introduction.md",
            "https://modelcontextprotocol.io/docs/concepts/tools.md",
            "https://modelcontextprotocol.io/quickstart.txt",
            "https://modelcontextprotocol.io/",
        ];
        let out = filter(&locators, &spec, v("2025-03-26"));
        assert_eq!(out, vec!["https://modelcontextprotocol.io/introduction.md"]);
    }

    #[test]
    fn filter_is_idempotent() {
        let spec = SectionSpec::literal("/server/");
        let locators = [
            "https://x.io/specification/2025-03-26/server/tools.md",
            "https://x.io/specification/2024-11-05/server/tools.md",
            "https://x.io/specification/2025-03-26/client/roots.md",
            "https://x.io/server/overview.md",
        ];
        let once = filter(&locators, &spec, v("2025-03-26"));
        let twice = filter(once.as_slice(), &spec, v("2025-03-26"));
        assert_eq!(once, twice);
        assert_eq!(once.len(), 2);
    }

    #[test]
    fn empty_result_is_valid() {
        let out = filter(&["https://x.io/a.md"], &SectionSpec::literal("zzz"), v("draft"));
        assert!(out.is_empty());
    }

    #[test]
    fn parse_reports_bad_regex() {
        assert!(SectionSpec::parse("^(unclosed").is_err());
        assert!(matches!(
            SectionSpec::parse("/client/").unwrap(),
            SectionSpec::Literal(_)
        ));
    }

    #[test]
    fn trailing_segment_of_plain_string() {
        assert_eq!(trailing_segment("a/b/c.md"), "c.md");
        assert_eq!(trailing_segment("solo"), "solo");
    }
}
