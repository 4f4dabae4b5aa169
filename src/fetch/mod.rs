//! Remote fetch abstraction
//!
//! Composition never talks to the network directly. It goes through a
//! [`Fetcher`], whose every failure shape is normalised into a
//! [`FetchOutcome`], and through [`DocSource`], which puts the TTL cache
//! and stale fallback in front of it.

pub mod http;
pub mod source;

pub use http::HttpFetcher;
pub use source::DocSource;

use async_trait::async_trait;
use std::fmt;

/// Result of a single remote fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Success status with the body as text
    Ok(String),

    /// The server answered with a non-success status
    HttpError(u16),

    /// No usable answer (DNS, TLS, timeout, unreadable body)
    TransportError(String),
}

impl FetchOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Body on success, failure description otherwise
    pub fn into_result(self) -> Result<String, String> {
        match self {
            Self::Ok(body) => Ok(body),
            failure => Err(failure.to_string()),
        }
    }
}

impl fmt::Display for FetchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(body) => write!(f, "ok ({} bytes)", body.len()),
            Self::HttpError(status) => write!(f, "HTTP {}", status),
            Self::TransportError(message) => write!(f, "transport error: {}", message),
        }
    }
}

/// Fetches the content behind a locator
///
/// Implementations must not panic on failure; every failure is reported
/// through the returned [`FetchOutcome`].
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, locator: &str) -> FetchOutcome;
}
