//! Smart search suggestions for Glowbook.
//!
//! This crate provides:
//! - Accent- and case-insensitive text normalization
//! - Levenshtein edit distance
//! - Exact, prefix, substring and fuzzy match scoring
//! - Per-item best-match scanning across fields and synonyms
//! - Stable ranking with a result cap, plus a popular-items fallback
//! - A bounded search history over a pluggable key-value store
//!
//! # Example
//!
//! ```
//! use glowbook_search::{smart_search, SearchConfig, SearchableItem};
//!
//! let items = vec![
//!     SearchableItem::new("1", "Lifting de Pestañas", "lashes", "Curvado natural"),
//!     SearchableItem::new("2", "Manicure de Gel", "nails", "Esmalte en gel"),
//! ];
//!
//! let results = smart_search("pestanas", &items, &SearchConfig::default());
//! assert_eq!(results[0].id, "1");
//! ```

mod config;
mod error;
mod fuzzy;
pub mod history;
mod item;
mod normalize;
mod relevance;
mod scanner;
mod suggest;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::{SearchConfig, DEFAULT_FUZZY_THRESHOLD, DEFAULT_MAX_SUGGESTIONS};
pub use error::{Result, SearchError, SearchErrorCode};
pub use fuzzy::edit_distance;
pub use history::{KeyValueStore, MemoryStore, SearchHistory, HISTORY_KEY, MAX_HISTORY};
pub use item::{Catalog, SearchField, SearchableItem};
pub use normalize::normalize;
pub use relevance::{classify, Classification, MatchType};
pub use scanner::best_match_for_item;
pub use suggest::{popular_suggestions, rank, smart_search, POPULAR_SCORE};

/// A ranked suggestion produced for one item.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSuggestion {
    /// Item id
    pub id: String,
    /// Item name
    pub name: String,
    /// Item category
    pub category: String,
    /// Item description
    pub description: String,
    /// Rule that produced the score
    pub match_type: MatchType,
    /// Relevance score (higher is better, always positive)
    pub score: u32,
    /// Original field or synonym text that matched
    pub matched_text: String,
}
