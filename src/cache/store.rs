//! Entry Store Module
//!
//! Concurrent map from normalized key to cache entry.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::cache::CacheEntry;

// == Entry Store ==
/// Process-wide entry storage.
///
/// Every operation locks for a single read or a single unconditional
/// overwrite. Entries are never removed; stale ones are overwritten on refresh.
#[derive(Debug, Default)]
pub struct EntryStore {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl EntryStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Get ==
    /// Returns a copy of the entry stored under `key`, fresh or not.
    pub async fn get(&self, key: &str) -> Option<CacheEntry> {
        self.entries.read().await.get(key).cloned()
    }

    // == Put ==
    /// Stores `entry` under `key`, replacing any previous entry wholesale.
    pub async fn put(&self, key: String, entry: CacheEntry) {
        self.entries.write().await.insert(key, entry);
    }

    // == Length ==
    /// Returns the number of distinct keys ever stored.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if nothing has been stored yet.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
