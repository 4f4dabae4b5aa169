//! Error types for mcp-docs
//!
//! All modules use `DocsResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mcp-docs operations
pub type DocsResult<T> = Result<T, DocsError>;

/// All errors that can occur in mcp-docs
#[derive(Error, Debug)]
pub enum DocsError {
    // Lookup errors
    #[error("Unsupported protocol version '{requested}'. Supported versions: {}", .supported.join(", "))]
    UnsupportedVersion {
        requested: String,
        supported: Vec<String>,
    },

    #[error("Unknown section '{name}'. Available sections: {}", .available.join(", "))]
    UnknownSection { name: String, available: Vec<String> },

    #[error("Unknown resource: {0}")]
    UnknownLocator(String),

    #[error("Invalid section pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    // Fetch errors
    #[error("Failed to fetch {locator}: {reason}")]
    FetchFailure { locator: String, reason: String },

    #[error("Internal error: schema for version {version} unavailable: {reason}")]
    SchemaFetch { version: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DocsError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a fetch failure for a locator
    pub fn fetch(locator: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::FetchFailure {
            locator: locator.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error should be reported to callers as an internal failure
    /// rather than a bad request
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::SchemaFetch { .. } | Self::Internal(_) | Self::Io { .. }
        )
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::UnsupportedVersion { .. } => Some("Run: mcp-docs versions"),
            Self::UnknownSection { .. } => Some("Run: mcp-docs sections"),
            Self::UnknownLocator(_) => Some(
                "Resource URIs look like mcp-docs://specification/2025-03-26/base-protocol",
            ),
            Self::SchemaFetch { .. } => Some("Check network access, then retry"),
            _ => None,
        }
    }
}
