//! CLI command implementations

pub mod history;
pub mod suggest;
pub mod text;

use glowbook_core::config::Config;
use glowbook_core::store::{FileStore, FileStoreConfig};
use glowbook_core::{Error, Result, ResultExt};
use glowbook_search::{Catalog, SearchHistory};
use serde::Serialize;
use std::path::Path;

/// Read and validate a JSON catalog file
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    glowbook_telemetry::timed_span!("load_catalog");

    if !path.exists() {
        return Err(Error::file_not_found(path));
    }

    let json = std::fs::read_to_string(path)?;
    let catalog = Catalog::from_json(&json)
        .map_err(Error::from)
        .context(format!("Loading catalog {}", path.display()))?;

    tracing::debug!(path = %path.display(), items = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Open the file-backed search history described by the configuration
pub fn open_history(config: &Config) -> Result<SearchHistory<FileStore>> {
    let history = &config.schema.history;
    let store = FileStore::new(FileStoreConfig::from(history))?;
    Ok(SearchHistory::with_key(store, history.key.clone()))
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
