//! Text diagnostics: normalization and edit distance

use super::print_json;
use crate::OutputFormat;
use anyhow::Result;
use glowbook_search::{edit_distance, normalize as normalize_text};

/// Print the normalized form of a text
pub fn normalize(text: &str, format: OutputFormat) -> Result<()> {
    let normalized = normalize_text(text);

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "input": text,
            "normalized": normalized,
        })),
        OutputFormat::Text => {
            println!("{}", normalized);
            Ok(())
        }
    }
}

/// Print the edit distance between two texts after normalization
pub fn distance(a: &str, b: &str, format: OutputFormat) -> Result<()> {
    let (a_norm, b_norm) = (normalize_text(a), normalize_text(b));
    let distance = edit_distance(&a_norm, &b_norm);

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "a": a_norm,
            "b": b_norm,
            "distance": distance,
        })),
        OutputFormat::Text => {
            println!("{}", distance);
            Ok(())
        }
    }
}
