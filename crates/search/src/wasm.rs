//! WASM bindings for search suggestions.

use crate::{SearchConfig, SearchableItem};
use wasm_bindgen::prelude::*;

/// Normalize text for accent- and case-insensitive comparison.
#[wasm_bindgen]
pub fn normalize_text(text: &str) -> String {
    crate::normalize(text)
}

/// Calculate Levenshtein edit distance between two strings.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str) -> usize {
    crate::edit_distance(a, b)
}

/// Search items and return ranked suggestions as JSON.
///
/// # Arguments
/// * `query` - Free-text query
/// * `items_json` - JSON array of searchable items
/// * `options_json` - JSON search options, empty for defaults
///
/// # Returns
/// JSON array of suggestions, best first
#[wasm_bindgen]
pub fn smart_search(query: &str, items_json: &str, options_json: &str) -> Result<String, JsValue> {
    let items: Vec<SearchableItem> = serde_json::from_str(items_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;

    let config = if options_json.trim().is_empty() {
        SearchConfig::default()
    } else {
        serde_json::from_str(options_json)
            .map_err(|e| JsValue::from_str(&format!("Options parse error: {}", e)))?
    };

    let results = crate::smart_search(query, &items, &config);

    serde_json::to_string(&results)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

/// Popular suggestions for an empty query, as JSON.
#[wasm_bindgen]
pub fn popular_suggestions(items_json: &str, limit: usize) -> Result<String, JsValue> {
    let items: Vec<SearchableItem> = serde_json::from_str(items_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;

    serde_json::to_string(&crate::popular_suggestions(&items, limit))
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}
