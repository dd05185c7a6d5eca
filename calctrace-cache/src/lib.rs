//! A bounded cache with least-recently-used eviction and a time-to-live.
//!
//! ```
//! use calctrace_cache::Cache;
//! use std::time::Duration;
//!
//! let mut cache = Cache::new(2, Duration::ZERO);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get("a");
//! cache.put("c", 3);
//!
//! // `b` was the least recently used entry
//! assert!(!cache.contains("b"));
//! assert_eq!(cache.get("a"), Some(1));
//! ```

mod key;
mod stats;

pub use key::binding_key;
pub use stats::CacheStats;

use std::{collections::HashMap, time::{Duration, Instant}};

/// A value held by a [`Cache`], along with its bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<V> {
    pub value: V,

    /// When the entry was inserted.
    pub created_at: Instant,

    /// The number of times the entry was returned by [`Cache::get`].
    pub access_count: u64,

    /// The estimated size of the entry, in bytes.
    pub estimated_size: usize,

    /// The value of the cache's clock at the last insertion or access of this entry.
    last_access: u64,
}

/// A cache of values keyed by strings, holding at most `max_size` entries.
///
/// When full, inserting a new key evicts the least recently used entry. Entries older than the
/// time-to-live are removed when next looked up; a time-to-live of [`Duration::ZERO`] disables
/// expiry.
#[derive(Clone)]
pub struct Cache<V> {
    entries: HashMap<String, CacheEntry<V>>,
    max_size: usize,
    ttl: Duration,

    /// Estimates the size of a value, in bytes.
    sizer: fn(&V) -> usize,

    /// Incremented on every insertion and access, to order entries by recency.
    clock: u64,

    hits: u64,
    misses: u64,
    evictions: u64,
    expirations: u64,
}

impl<V> std::fmt::Debug for Cache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache")
            .field("len", &self.entries.len())
            .field("max_size", &self.max_size)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl<V: Clone> Cache<V> {
    /// Creates an empty cache. The size of every value is estimated as the size of `V` itself.
    pub fn new(max_size: usize, ttl: Duration) -> Self {
        Self::with_sizer(max_size, ttl, |_| std::mem::size_of::<V>())
    }

    /// Creates an empty cache that estimates the size of values with the given function.
    pub fn with_sizer(max_size: usize, ttl: Duration, sizer: fn(&V) -> usize) -> Self {
        Self {
            entries: HashMap::new(),
            max_size,
            ttl,
            sizer,
            clock: 0,
            hits: 0,
            misses: 0,
            evictions: 0,
            expirations: 0,
        }
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the number of entries held, including expired entries that were not looked up
    /// since they expired.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_expired(&self, entry: &CacheEntry<V>) -> bool {
        !self.ttl.is_zero() && entry.created_at.elapsed() > self.ttl
    }

    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    /// Returns a copy of the value for the given key, if it is held and not expired.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let expired = match self.entries.get(key) {
            Some(entry) => self.is_expired(entry),
            None => {
                self.misses += 1;
                log::debug!("cache miss for `{}`", key);
                return None;
            },
        };

        if expired {
            self.entries.remove(key);
            self.expirations += 1;
            self.misses += 1;
            log::debug!("cache entry for `{}` expired", key);
            return None;
        }

        let now = self.tick();
        let entry = self.entries.get_mut(key)?;
        entry.access_count += 1;
        entry.last_access = now;
        self.hits += 1;
        log::debug!("cache hit for `{}`", key);
        Some(entry.value.clone())
    }

    /// Inserts a value, replacing any value already held for the key. If the cache is full and
    /// the key is new, the least recently used entry is evicted first.
    pub fn put(&mut self, key: impl Into<String>, value: V) {
        if self.max_size == 0 {
            return;
        }

        let key = key.into();
        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_size {
            self.evict_lru();
        }

        let entry = CacheEntry {
            estimated_size: (self.sizer)(&value) + key.len(),
            value,
            created_at: Instant::now(),
            access_count: 0,
            last_access: self.tick(),
        };
        self.entries.insert(key, entry);
    }

    /// Removes the entry for the given key, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.entries.remove(key).map(|entry| entry.value)
    }

    /// Returns true if a live entry is held for the key. This does not count as an access.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.get(key).is_some_and(|entry| !self.is_expired(entry))
    }

    /// Returns the entry for the key without counting an access, even if it has expired.
    pub fn peek(&self, key: &str) -> Option<&CacheEntry<V>> {
        self.entries.get(key)
    }

    /// Removes every entry. Statistics are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Removes every expired entry, returning how many were removed.
    pub fn purge_expired(&mut self) -> usize {
        if self.ttl.is_zero() {
            return 0;
        }
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.created_at.elapsed() <= ttl);
        let purged = before - self.entries.len();
        self.expirations += purged as u64;
        purged
    }

    fn evict_lru(&mut self) {
        let lru = self.entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_access)
            .map(|(key, _)| key.clone());
        if let Some(key) = lru {
            log::debug!("evicting least recently used cache entry `{}`", key);
            self.entries.remove(&key);
            self.evictions += 1;
        }
    }

    pub fn stats(&self) -> CacheStats {
        let total_requests = self.hits + self.misses;
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
            expirations: self.expirations,
            size: self.entries.len(),
            max_size: self.max_size,
            hit_rate: if total_requests == 0 {
                0.0
            } else {
                self.hits as f64 / total_requests as f64
            },
            total_requests,
            total_bytes: self.entries.values().map(|entry| entry.estimated_size).sum(),
        }
    }
}
