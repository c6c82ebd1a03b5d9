//! History commands

use super::{open_history, print_json};
use crate::OutputFormat;
use anyhow::Result;
use glowbook_cli::output::Status;
use glowbook_core::config::Config;
use serde_json::json;

/// List remembered queries
pub fn list(config: &Config, format: OutputFormat) -> Result<()> {
    let entries = open_history(config)?.entries();

    match format {
        OutputFormat::Json => print_json(&entries),
        OutputFormat::Text => {
            Status::header("Recent searches");
            if entries.is_empty() {
                Status::info("No recent searches");
            }
            for (i, query) in entries.iter().enumerate() {
                Status::entry(i + 1, query, "");
            }
            Ok(())
        }
    }
}

/// Remember a query
///
/// JSON output reports the trimmed query, or `null` when it was empty.
pub fn add(config: &Config, query: &str, format: OutputFormat) -> Result<()> {
    let query = query.trim();
    if !query.is_empty() {
        open_history(config)?.add(query);
    }

    match format {
        OutputFormat::Json => print_json(&json!({ "remembered": (!query.is_empty()).then_some(query) })),
        OutputFormat::Text => {
            if query.is_empty() {
                Status::warning("Ignoring empty query");
            } else {
                Status::success(&format!("Remembered \"{}\"", query));
            }
            Ok(())
        }
    }
}

/// Forget all remembered queries
pub fn clear(config: &Config, format: OutputFormat) -> Result<()> {
    open_history(config)?.clear();

    match format {
        OutputFormat::Json => print_json(&json!({ "cleared": true })),
        OutputFormat::Text => {
            Status::success("Search history cleared");
            Ok(())
        }
    }
}
