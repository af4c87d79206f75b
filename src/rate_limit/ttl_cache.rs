//! Time-to-live cache for API responses.
//!
//! Entries older than the TTL are treated as absent. Expired entries are only
//! dropped when a lookup finds them; there is no sweep.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use torn_api_client::rate_limit::TtlCache;
//!
//! let mut cache: TtlCache<String, u32> = TtlCache::new(Duration::from_secs(30));
//!
//! cache.insert("user/?selections=basic".to_string(), 1);
//! assert_eq!(cache.get(&"user/?selections=basic".to_string()), Some(&1));
//!
//! cache.clear();
//! assert!(cache.is_empty());
//! ```

use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

use tokio::time::Instant;

/// A cache whose entries expire after a configurable TTL.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    cache: HashMap<K, (V, Instant)>,
    ttl: Duration,
}

impl<K, V> TtlCache<K, V>
where
    K: Hash + Eq,
{
    /// Create a new TTL cache with the specified time-to-live duration.
    pub fn new(ttl: Duration) -> Self {
        Self {
            cache: HashMap::new(),
            ttl,
        }
    }

    /// Insert or overwrite an entry, timestamped now.
    pub fn insert(&mut self, key: K, value: V) {
        self.cache.insert(key, (value, Instant::now()));
    }

    /// Get a value if it exists and hasn't expired.
    ///
    /// An expired entry found here is removed.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let expired = self
            .cache
            .get(key)
            .is_some_and(|(_, inserted)| inserted.elapsed() >= self.ttl);
        if expired {
            self.cache.remove(key);
            return None;
        }
        self.cache.get(key).map(|(value, _)| value)
    }

    /// Number of stored entries, including expired ones not yet evicted.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Clear all entries from the cache.
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

impl<K, V> Default for TtlCache<K, V>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new(crate::rate_limit::limits::CACHE_TTL)
    }
}
