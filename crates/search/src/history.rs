//! Bounded search history over a pluggable key-value store.
//!
//! History is a convenience feature: storage failures are logged and
//! swallowed, never surfaced to the caller.
//!
//! # Example
//!
//! ```
//! use glowbook_search::{MemoryStore, SearchHistory};
//!
//! let history = SearchHistory::new(MemoryStore::new());
//! history.add("uñas");
//! history.add("pestañas");
//! assert_eq!(history.entries(), vec!["pestañas", "uñas"]);
//! ```

use crate::error::{Result, SearchError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Well-known key the history list is stored under.
pub const HISTORY_KEY: &str = "glowbook.search-history";

/// Maximum number of remembered queries.
pub const MAX_HISTORY: usize = 5;

/// String key-value persistence used by [`SearchHistory`].
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// In-memory key-value store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let guard = self
            .entries
            .read()
            .map_err(|_| SearchError::Storage("memory store lock poisoned".into()))?;
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut guard = self
            .entries
            .write()
            .map_err(|_| SearchError::Storage("memory store lock poisoned".into()))?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut guard = self
            .entries
            .write()
            .map_err(|_| SearchError::Storage("memory store lock poisoned".into()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Most-recent-first list of submitted queries.
///
/// Entries are trimmed, unique by exact string equality and capped at
/// [`MAX_HISTORY`]. Read-modify-write cycles are serialized per instance;
/// separate instances sharing one store follow last-write-wins.
pub struct SearchHistory<S> {
    store: S,
    key: String,
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> SearchHistory<S> {
    /// History stored under [`HISTORY_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, HISTORY_KEY)
    }

    /// History stored under a custom key.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stored queries, newest first. Any read or decode failure yields
    /// an empty list.
    pub fn entries(&self) -> Vec<String> {
        match self.load() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "search history unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Record a submitted query.
    ///
    /// Blank queries are ignored. An existing identical entry moves to the
    /// front instead of being duplicated. Comparison is exact after
    /// trimming, so `"uñas"` and `"Uñas"` are distinct entries.
    pub fn add(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }

        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut entries = self.entries();
        entries.retain(|existing| existing != query);
        entries.insert(0, query.to_string());
        entries.truncate(MAX_HISTORY);

        if let Err(e) = self.save(&entries) {
            tracing::warn!(key = %self.key, error = %e, "failed to persist search history");
        }
    }

    /// Forget all stored queries.
    pub fn clear(&self) {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        if let Err(e) = self.store.remove(&self.key) {
            tracing::warn!(key = %self.key, error = %e, "failed to clear search history");
        }
    }

    fn load(&self) -> Result<Vec<String>> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };
        let mut entries: Vec<String> = serde_json::from_str(&raw)
            .map_err(|_| SearchError::CorruptValue(self.key.clone()))?;
        entries.truncate(MAX_HISTORY);
        Ok(entries)
    }

    fn save(&self, entries: &[String]) -> Result<()> {
        let raw = serde_json::to_string(entries)?;
        self.store.set(&self.key, &raw)
    }
}
