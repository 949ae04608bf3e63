//! Timestamped cache entries
//!
//! An entry pairs a fetched result set with the moment it was stored so the
//! cache can decide whether it is still fresh.

use crate::parser::JobRecord;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;

/// A cached result set for one query fingerprint
///
/// The payload is shared and immutable; overwriting a key replaces the whole
/// entry rather than touching the records in place.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The query fingerprint this entry was stored under
    pub key: String,

    /// The records fetched for the query
    pub payload: Arc<[JobRecord]>,

    /// When the records were stored
    pub stored_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Creates a new entry stamped with the current time
    pub fn new(key: String, payload: Vec<JobRecord>) -> Self {
        Self {
            key,
            payload: payload.into(),
            stored_at: Utc::now(),
        }
    }

    /// Returns how long ago the entry was stored
    pub fn age(&self) -> chrono::Duration {
        Utc::now() - self.stored_at
    }

    /// Checks if the entry is older than the given time-to-live
    ///
    /// An entry exactly `ttl` old is still fresh. A timestamp in the future
    /// (clock moved backwards) counts as fresh.
    pub fn is_stale(&self, ttl: Duration) -> bool {
        self.age().to_std().map(|age| age > ttl).unwrap_or(false)
    }
}
