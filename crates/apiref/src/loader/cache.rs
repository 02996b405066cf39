//! Key-value cache contract for validated documents
//!
//! Copyright (c) 2025 Apiref Team
//! Licensed under the MIT or Apache-2.0 license

use serde_json::Value;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

/// Key-value store for validated documents
///
/// The loader only ever stores documents that passed decoding, applicability
/// and schema validation. Entries are retained permanently from the loader's
/// point of view; eviction policy belongs to the backend. Keys embed a
/// content fingerprint, so the loader never overwrites an entry with
/// different content, it just stops asking for the old key.
pub trait DocumentCache: Send + Sync {
    /// Look up a document by key
    fn get(&self, key: &str) -> Option<Value>;

    /// Store a document under a key, with permanent retention
    fn set(&self, key: &str, value: Value);
}

/// In-memory cache backend
///
/// Suitable as the default backend and for tests. Concurrent readers share
/// the read lock; a benign race between two writers of the same key is fine
/// since content is deterministic for a given file state.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached documents
    pub fn len(&self) -> usize {
        self.entries.read().expect("cache lock poisoned").len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all entries
    pub fn clear(&self) {
        self.entries.write().expect("cache lock poisoned").clear();
    }
}

impl DocumentCache for MemoryCache {
    fn get(&self, key: &str) -> Option<Value> {
        let entries = self.entries.read().expect("cache lock poisoned");
        let hit = entries.get(key).cloned();
        debug!(key, hit = hit.is_some(), "document cache lookup");
        hit
    }

    fn set(&self, key: &str, value: Value) {
        let mut entries = self.entries.write().expect("cache lock poisoned");
        entries.insert(key.to_string(), value);
        debug!(key, size = entries.len(), "document cached");
    }
}
