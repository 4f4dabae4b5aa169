//! In-memory fetch cache with TTL expiry and stale reads
//!
//! Entries live for the whole process. An entry older than the TTL is
//! reported absent by [`TtlCache::get`] but stays readable through
//! [`TtlCache::get_stale`], which callers use as a last resort when a
//! refresh fails.
//!
//! | Age | `get` | `get_stale` |
//! |-----|-------|-------------|
//! | never written | None | None |
//! | < ttl | Some | Some |
//! | >= ttl | None | Some |

pub mod clock;

pub use clock::{Clock, ManualClock, SystemClock};

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Default time-to-live for cached fragments
pub const DEFAULT_TTL_SECS: i64 = 3600;

/// A cached value and the time it was written
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    written_at: DateTime<Utc>,
}

/// Key-value cache with logical expiry
///
/// Concurrent writers to the same key race; the last write wins.
pub struct TtlCache<V> {
    entries: Mutex<HashMap<String, CacheEntry<V>>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> TtlCache<V> {
    /// Create a cache with the default TTL and the system clock
    pub fn new() -> Self {
        Self::with_clock(Duration::seconds(DEFAULT_TTL_SECS), Arc::new(SystemClock))
    }

    /// Create a cache with an explicit TTL and clock
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    /// Get a value if it was written less than one TTL ago
    pub fn get(&self, key: &str) -> Option<V> {
        let now = self.clock.now();
        self.lock()
            .get(key)
            .filter(|entry| now - entry.written_at < self.ttl)
            .map(|entry| entry.value.clone())
    }

    /// Get a value regardless of age
    pub fn get_stale(&self, key: &str) -> Option<V> {
        self.lock().get(key).map(|entry| entry.value.clone())
    }

    /// Store a value stamped with the current time
    pub fn set(&self, key: impl Into<String>, value: V) {
        let entry = CacheEntry {
            value,
            written_at: self.clock.now(),
        };
        self.lock().insert(key.into(), entry);
    }

    /// Number of keys ever written
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // A panic while holding the lock cannot leave a half-written entry,
    // so a poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry<V>>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
