//! Search engine configuration.

use crate::SearchField;
use serde::{Deserialize, Deserializer, Serialize};

/// Default maximum edit distance admitted as a fuzzy match.
pub const DEFAULT_FUZZY_THRESHOLD: usize = 2;
/// Default result cap.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 8;

/// Options for one search evaluation.
///
/// Negative numbers coming from loosely typed sources (JSON, TOML, CLI)
/// are clamped to 0 when the configuration is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Fields to scan, in order
    #[serde(default = "default_search_fields", alias = "searchFields")]
    pub search_fields: Vec<SearchField>,

    /// Maximum edit distance for a fuzzy match
    #[serde(
        default = "default_fuzzy_threshold",
        alias = "fuzzyThreshold",
        deserialize_with = "deserialize_non_negative"
    )]
    pub fuzzy_threshold: usize,

    /// Result cap
    #[serde(
        default = "default_max_suggestions",
        alias = "maxSuggestions",
        deserialize_with = "deserialize_non_negative"
    )]
    pub max_suggestions: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_fields: default_search_fields(),
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

impl SearchConfig {
    /// Sets the fields to scan.
    pub fn with_fields(mut self, fields: impl Into<Vec<SearchField>>) -> Self {
        self.search_fields = fields.into();
        self
    }

    /// Sets the fuzzy threshold, clamping negatives to 0.
    pub fn with_fuzzy_threshold(mut self, threshold: i64) -> Self {
        self.fuzzy_threshold = clamp_non_negative("fuzzy_threshold", threshold);
        self
    }

    /// Sets the result cap, clamping negatives to 0.
    pub fn with_max_suggestions(mut self, max: i64) -> Self {
        self.max_suggestions = clamp_non_negative("max_suggestions", max);
        self
    }
}

fn default_search_fields() -> Vec<SearchField> {
    SearchField::DEFAULT_ORDER.to_vec()
}

fn default_fuzzy_threshold() -> usize {
    DEFAULT_FUZZY_THRESHOLD
}

fn default_max_suggestions() -> usize {
    DEFAULT_MAX_SUGGESTIONS
}

fn clamp_non_negative(name: &str, value: i64) -> usize {
    if value < 0 {
        tracing::warn!(option = name, value, "negative search option clamped to 0");
        return 0;
    }
    usize::try_from(value).unwrap_or(usize::MAX)
}

fn deserialize_non_negative<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = i64::deserialize(deserializer)?;
    Ok(clamp_non_negative("search option", value))
}
