//! Core utilities for Glowbook search tools
//!
//! This crate provides shared functionality used by the search front ends:
//!
//! - **Error handling**: Structured errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with defaults
//! - **Storage**: File-backed key-value store for search history
//!
//! # Example
//!
//! ```rust,no_run
//! use glowbook_core::config::Config;
//! use glowbook_core::store::{FileStore, FileStoreConfig};
//! use glowbook_search::SearchHistory;
//!
//! let config = Config::load(None)?;
//! let store = FileStore::new(FileStoreConfig::from(&config.schema.history))?;
//! let history = SearchHistory::with_key(store, config.schema.history.key.clone());
//!
//! for query in history.entries() {
//!     println!("{query}");
//! }
//! # Ok::<(), glowbook_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod store;

pub use error::{Error, ErrorCode, Result, ResultExt};

