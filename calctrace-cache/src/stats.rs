use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A snapshot of the statistics of a [`Cache`](crate::Cache).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CacheStats {
    /// The number of lookups that found a live entry.
    pub hits: u64,

    /// The number of lookups that found nothing, including those that found an expired entry.
    pub misses: u64,

    /// The number of entries removed to make room for new ones.
    pub evictions: u64,

    /// The number of entries removed because they outlived the time-to-live.
    pub expirations: u64,

    /// The number of entries currently held.
    pub size: usize,

    /// The maximum number of entries the cache holds.
    pub max_size: usize,

    /// The fraction of lookups that were hits, or `0` if there were no lookups.
    pub hit_rate: f64,

    /// The total number of lookups.
    pub total_requests: u64,

    /// The sum of the estimated sizes of the entries currently held, in bytes.
    pub total_bytes: usize,
}

impl Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}/{} entries, {} bytes, {} hits, {} misses ({:.1}% hit rate), {} evictions, {} expirations",
            self.size,
            self.max_size,
            self.total_bytes,
            self.hits,
            self.misses,
            self.hit_rate * 100.0,
            self.evictions,
            self.expirations,
        )
    }
}
