//! mcp-docs - Model Context Protocol documentation aggregator
//!
//! Fetches versioned documentation fragments, filters them into logical
//! sections and composes them into single documents, with a TTL cache
//! that falls back to stale copies when a refresh fails.

pub mod cache;
pub mod catalog;
pub mod cli;
pub mod compose;
pub mod config;
pub mod error;
pub mod fetch;
pub mod section;
pub mod service;
pub mod version;

#[cfg(test)]
mod testing;

pub use error::{DocsError, DocsResult};
pub use service::{DocsService, Resource};
