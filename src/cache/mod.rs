//! In-memory result cache
//!
//! Maps a query fingerprint to the records fetched for it, so that repeated
//! queries inside the TTL window do not trigger another round of requests.
//! Stale entries are evicted lazily on read, on an explicit sweep, or when the
//! cache is full and needs room for a new key.

mod entry;

pub use entry::CacheEntry;

use crate::parser::JobRecord;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Time-bounded store of fetched result sets
///
/// The cache is owned by whoever drives the fetch pipeline and is mutated
/// through `&mut self` only, so there is a single writer at any instant.
#[derive(Debug)]
pub struct ResultCache {
    entries: HashMap<String, CacheEntry>,
    ttl: Duration,
    capacity: usize,
}

impl ResultCache {
    /// Creates an empty cache
    ///
    /// # Arguments
    ///
    /// * `ttl` - Maximum age of an entry before it is considered stale
    /// * `capacity` - Maximum number of entries held at once (at least 1)
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            capacity: capacity.max(1),
        }
    }

    /// Returns the cached payload for `key` if it is still fresh
    ///
    /// A stale entry is removed as a side effect, so a later `get` for the
    /// same key also misses.
    pub fn get(&mut self, key: &str) -> Option<Arc<[JobRecord]>> {
        let stale = self.entries.get(key)?.is_stale(self.ttl);

        if stale {
            tracing::debug!("Evicting stale cache entry: {}", key);
            self.entries.remove(key);
            return None;
        }

        self.entries.get(key).map(|entry| Arc::clone(&entry.payload))
    }

    /// Stores `payload` under `key`, replacing any previous entry
    pub fn set(&mut self, key: impl Into<String>, payload: Vec<JobRecord>) {
        let key = key.into();

        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            self.make_room();
        }

        let entry = CacheEntry::new(key.clone(), payload);
        self.entries.insert(key, entry);
    }

    /// Removes every entry older than the TTL
    ///
    /// # Returns
    ///
    /// The number of entries removed
    pub fn sweep(&mut self) -> usize {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_stale(ttl));
        let removed = before - self.entries.len();

        if removed > 0 {
            tracing::debug!("Swept {} stale cache entries", removed);
        }

        removed
    }

    /// Removes every entry regardless of age
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of entries currently held, stale or not
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Frees at least one slot: stale entries go first, then the oldest one
    fn make_room(&mut self) {
        if self.sweep() > 0 {
            return;
        }

        let oldest = self
            .entries
            .values()
            .min_by_key(|entry| entry.stored_at)
            .map(|entry| entry.key.clone());

        if let Some(key) = oldest {
            tracing::debug!("Cache full, evicting oldest entry: {}", key);
            self.entries.remove(&key);
        }
    }

    #[cfg(test)]
    fn backdate(&mut self, key: &str, by: chrono::Duration) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.stored_at = entry.stored_at - by;
        }
    }
}
