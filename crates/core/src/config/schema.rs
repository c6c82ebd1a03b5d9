//! Configuration schema definitions

use glowbook_search::{SearchConfig, HISTORY_KEY};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub popular: PopularConfig,

    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Empty-query suggestion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopularConfig {
    /// Number of popular items shown when nothing is typed
    #[serde(default = "default_popular_limit")]
    pub limit: usize,
}

impl Default for PopularConfig {
    fn default() -> Self {
        Self {
            limit: default_popular_limit(),
        }
    }
}

fn default_popular_limit() -> usize {
    6
}

/// Search history storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Storage directory (defaults to the platform data directory)
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// Key the history list is stored under
    #[serde(default = "default_history_key")]
    pub key: String,

    /// Keep an in-memory copy of stored entries
    #[serde(default = "default_true")]
    pub memory_cache: bool,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            dir: None,
            key: default_history_key(),
            memory_cache: true,
        }
    }
}

impl HistoryConfig {
    /// Storage directory, falling back to `<data dir>/glowbook/history`.
    pub fn resolved_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from(".glowbook"))
                .join("glowbook")
                .join("history")
        })
    }
}

fn default_history_key() -> String {
    HISTORY_KEY.to_string()
}

fn default_true() -> bool {
    true
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
