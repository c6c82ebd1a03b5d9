//! File-backed key-value store for search history
//!
//! Each key lives in its own JSON file under the store directory, named by
//! the SHA-256 of the key. Entries carry a hash of their value; an entry
//! that fails the check is deleted and reported as corrupt.
//!
//! # Example
//!
//! ```rust,no_run
//! use glowbook_core::store::{FileStore, FileStoreConfig};
//! use glowbook_search::SearchHistory;
//!
//! let store = FileStore::new(FileStoreConfig::default())?;
//! let history = SearchHistory::new(store);
//! history.add("manicure");
//! # Ok::<(), glowbook_core::Error>(())
//! ```

use crate::error::{Error, ErrorCode, Result};
use glowbook_search::{KeyValueStore, SearchError};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// File store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileStoreConfig {
    /// Directory holding one file per key
    pub dir: PathBuf,
    /// Keep an in-memory copy of values read or written
    pub memory_cache: bool,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            dir: crate::config::HistoryConfig::default().resolved_dir(),
            memory_cache: true,
        }
    }
}

impl From<&crate::config::HistoryConfig> for FileStoreConfig {
    fn from(config: &crate::config::HistoryConfig) -> Self {
        Self {
            dir: config.resolved_dir(),
            memory_cache: config.memory_cache,
        }
    }
}

/// On-disk entry
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredEntry {
    /// Original key, for inspection
    key: String,
    /// Seconds since the epoch at last write
    updated_at: u64,
    /// SHA-256 of `value`
    hash: String,
    value: String,
}

/// Directory-backed key-value store with optional in-memory layer
pub struct FileStore {
    config: FileStoreConfig,
    memory: Option<RwLock<HashMap<String, String>>>,
}

impl FileStore {
    /// Create a store, creating its directory if needed
    pub fn new(config: FileStoreConfig) -> Result<Self> {
        fs::create_dir_all(&config.dir).map_err(|e| {
            Error::from(e).with_context(format!("Creating store directory {}", config.dir.display()))
        })?;

        let memory = if config.memory_cache {
            Some(RwLock::new(HashMap::new()))
        } else {
            None
        };

        Ok(Self { config, memory })
    }

    /// Store directory
    pub fn dir(&self) -> &std::path::Path {
        &self.config.dir
    }

    /// Read a value
    pub fn read(&self, key: &str) -> Result<Option<String>> {
        if let Some(ref memory) = self.memory {
            let guard = memory.read().map_err(|_| Error::new(
                ErrorCode::Internal,
                "Failed to acquire store read lock",
            ))?;

            if let Some(value) = guard.get(key) {
                return Ok(Some(value.clone()));
            }
        }

        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let entry: StoredEntry = match serde_json::from_str(&fs::read_to_string(&path)?) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding unreadable store entry");
                let _ = fs::remove_file(&path);
                return Err(Error::corrupt_entry(key));
            }
        };

        // Verify integrity
        if hash_hex(entry.value.as_bytes()) != entry.hash {
            tracing::warn!(key, "discarding store entry with mismatched hash");
            let _ = fs::remove_file(&path);
            return Err(Error::corrupt_entry(key));
        }

        if let Some(ref memory) = self.memory {
            if let Ok(mut guard) = memory.write() {
                guard.insert(key.to_string(), entry.value.clone());
            }
        }

        Ok(Some(entry.value))
    }

    /// Write a value
    pub fn write(&self, key: &str, value: &str) -> Result<()> {
        let entry = StoredEntry {
            key: key.to_string(),
            updated_at: now_secs(),
            hash: hash_hex(value.as_bytes()),
            value: value.to_string(),
        };

        // Readers only ever see complete files
        let path = self.entry_path(key);
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, serde_json::to_string(&entry)?)?;
        fs::rename(&tmp_path, &path)?;

        if let Some(ref memory) = self.memory {
            if let Ok(mut guard) = memory.write() {
                guard.insert(key.to_string(), entry.value);
            }
        }

        Ok(())
    }

    /// Delete a value, returning whether it existed on disk
    ///
    /// The memory layer is only evicted once the file is gone, so a failed
    /// removal leaves both layers holding the same value.
    pub fn delete(&self, key: &str) -> Result<bool> {
        let existed = match fs::remove_file(self.entry_path(key)) {
            Ok(()) => true,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
            Err(e) => return Err(e.into()),
        };

        if let Some(ref memory) = self.memory {
            if let Ok(mut guard) = memory.write() {
                guard.remove(key);
            }
        }

        Ok(existed)
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.config.dir.join(format!("{}.json", hash_hex(key.as_bytes())))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> glowbook_search::Result<Option<String>> {
        self.read(key).map_err(|e| to_search_error(key, e))
    }

    fn set(&self, key: &str, value: &str) -> glowbook_search::Result<()> {
        self.write(key, value).map_err(|e| to_search_error(key, e))
    }

    fn remove(&self, key: &str) -> glowbook_search::Result<()> {
        self.delete(key).map(|_| ()).map_err(|e| to_search_error(key, e))
    }
}

fn to_search_error(key: &str, err: Error) -> SearchError {
    match err.code {
        ErrorCode::CorruptEntry => SearchError::CorruptValue(key.to_string()),
        _ => SearchError::Storage(err.to_string()),
    }
}

fn hash_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glowbook_search::{SearchHistory, HISTORY_KEY};
    use tempfile::TempDir;

    fn test_store(memory_cache: bool) -> (FileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config = FileStoreConfig {
            dir: temp_dir.path().to_path_buf(),
            memory_cache,
        };
        let store = FileStore::new(config).unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_write_and_read() {
        let (store, _temp) = test_store(true);

        store.write("key", "value").unwrap();
        assert_eq!(store.read("key").unwrap(), Some("value".to_string()));
    }

    #[test]
    fn test_read_missing() {
        let (store, _temp) = test_store(true);
        assert!(store.read("nonexistent").unwrap().is_none());
    }

    #[test]
    fn test_delete() {
        let (store, _temp) = test_store(true);

        store.write("to_remove", "42").unwrap();
        assert!(store.delete("to_remove").unwrap());
        assert!(store.read("to_remove").unwrap().is_none());
        assert!(!store.delete("to_remove").unwrap());
    }

    #[test]
    fn test_failed_delete_keeps_memory_layer() {
        let (store, _temp) = test_store(true);
        store.write("k", "v").unwrap();

        // A directory in place of the entry file makes the removal fail
        let path = store.entry_path("k");
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        assert!(store.delete("k").is_err());
        assert_eq!(store.read("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_persists_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let config = FileStoreConfig {
            dir: temp_dir.path().to_path_buf(),
            memory_cache: false,
        };

        FileStore::new(config.clone()).unwrap().write("k", "v").unwrap();
        let reopened = FileStore::new(config).unwrap();
        assert_eq!(reopened.read("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_tampered_entry_is_corrupt() {
        let (store, _temp) = test_store(false);
        store.write("k", "original").unwrap();

        let path = store.entry_path("k");
        let content = fs::read_to_string(&path).unwrap().replace("original", "tampered");
        fs::write(&path, content).unwrap();

        let err = store.read("k").unwrap_err();
        assert_eq!(err.code, ErrorCode::CorruptEntry);
        assert!(!path.exists());
    }

    #[test]
    fn test_garbage_file_is_corrupt() {
        let (store, _temp) = test_store(false);
        fs::write(store.entry_path("k"), "not json at all").unwrap();

        assert!(matches!(
            KeyValueStore::get(&store, "k"),
            Err(SearchError::CorruptValue(_))
        ));
    }

    #[test]
    fn test_history_over_file_store() {
        let temp_dir = TempDir::new().unwrap();
        let config = FileStoreConfig {
            dir: temp_dir.path().to_path_buf(),
            memory_cache: false,
        };

        let history = SearchHistory::new(FileStore::new(config.clone()).unwrap());
        for q in ["uno", "dos", "tres", "cuatro", "cinco", "seis"] {
            history.add(q);
        }

        let reopened = SearchHistory::new(FileStore::new(config).unwrap());
        assert_eq!(reopened.entries(), vec!["seis", "cinco", "cuatro", "tres", "dos"]);

        reopened.clear();
        assert!(reopened.store().read(HISTORY_KEY).unwrap().is_none());
    }
}
