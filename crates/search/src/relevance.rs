//! Match classification and relevance scoring.
//!
//! Both inputs are expected to be normalized (see [`crate::normalize`]).
//! Rules are tried in priority order and the first one that applies wins:
//! exact, starts-with, contains, then fuzzy within an edit-distance threshold.

use crate::edit_distance;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Score of an exact match.
pub const EXACT_SCORE: i64 = 100;
/// Base score of a prefix match, reduced by the unmatched tail length.
pub const STARTS_WITH_BASE: i64 = 80;
/// Base score of a substring match, reduced by the match position.
pub const CONTAINS_BASE: i64 = 60;
/// Base score of a fuzzy match, reduced by the edit distance.
pub const FUZZY_BASE: i64 = 40;
/// Bonus for candidates shorter than three times the query.
pub const SHORT_TEXT_BONUS: i64 = 10;

/// Why a candidate matched a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// Candidate equals the query
    Exact,
    /// Candidate begins with the query
    StartsWith,
    /// Candidate contains the query
    Contains,
    /// Candidate is within the edit-distance threshold
    Fuzzy,
}

impl MatchType {
    /// Wire name of the match type.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::StartsWith => "starts_with",
            MatchType::Contains => "contains",
            MatchType::Fuzzy => "fuzzy",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying one candidate against a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Rule that matched
    pub match_type: MatchType,
    /// Score after the short-text bonus; may be zero or negative
    pub score: i64,
}

/// Classify a normalized candidate against a normalized query.
///
/// Returns `None` when the query is empty or when no rule applies.
/// A prefix match against a very long candidate yields a negative
/// score; callers drop non-positive scores.
///
/// # Example
/// ```
/// use glowbook_search::{classify, MatchType};
///
/// let c = classify("mani", "manicure de gel", 2).unwrap();
/// assert_eq!(c.match_type, MatchType::StartsWith);
/// assert_eq!(c.score, 58);
/// ```
pub fn classify(query_norm: &str, text_norm: &str, fuzzy_threshold: usize) -> Option<Classification> {
    if query_norm.is_empty() {
        return None;
    }

    let query_len = char_len(query_norm);
    let text_len = char_len(text_norm);

    let (match_type, score) = if text_norm == query_norm {
        (MatchType::Exact, EXACT_SCORE)
    } else if text_norm.starts_with(query_norm) {
        let tail = as_score(text_len - query_len);
        (MatchType::StartsWith, STARTS_WITH_BASE.saturating_sub(tail.saturating_mul(2)))
    } else if let Some(byte_idx) = text_norm.find(query_norm) {
        let position = as_score(char_len(&text_norm[..byte_idx]));
        (MatchType::Contains, CONTAINS_BASE.saturating_sub(position.saturating_mul(2)))
    } else {
        let distance = edit_distance(query_norm, text_norm);
        if distance > fuzzy_threshold {
            return None;
        }
        let penalty = as_score(distance).saturating_mul(10);
        (MatchType::Fuzzy, FUZZY_BASE.saturating_sub(penalty).max(0))
    };

    let score = if score > 0 && text_len < query_len.saturating_mul(3) {
        score + SHORT_TEXT_BONUS
    } else {
        score
    };

    Some(Classification { match_type, score })
}

#[inline]
fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[inline]
fn as_score(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
