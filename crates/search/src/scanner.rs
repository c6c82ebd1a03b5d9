//! Per-item scanning across configured fields and synonyms.

use crate::{classify, normalize, MatchType, SearchConfig, SearchSuggestion, SearchableItem};

/// Best candidate seen so far for one item.
struct BestMatch<'a> {
    match_type: MatchType,
    score: i64,
    matched_text: &'a str,
}

/// Find the single best match of a normalized query within one item.
///
/// Every configured field is tried in order, each followed by the item's
/// synonyms. Only a strictly higher score replaces the current best, so
/// the first candidate wins ties. Returns `None` unless the best score
/// is positive.
pub fn best_match_for_item(
    item: &SearchableItem,
    query_norm: &str,
    config: &SearchConfig,
) -> Option<SearchSuggestion> {
    if query_norm.is_empty() {
        return None;
    }

    let synonyms: Vec<(&str, String)> = item
        .synonyms()
        .iter()
        .map(|s| (s.as_str(), normalize(s)))
        .collect();

    let threshold = config.fuzzy_threshold;
    let mut best: Option<BestMatch<'_>> = None;

    for &field in &config.search_fields {
        let value = item.field(field);
        consider(&mut best, query_norm, threshold, value, &normalize(value));
        for (original, normalized) in &synonyms {
            consider(&mut best, query_norm, threshold, *original, normalized);
        }
    }

    let best = best?;
    let score = u32::try_from(best.score).ok().filter(|s| *s > 0)?;

    Some(SearchSuggestion {
        id: item.id.clone(),
        name: item.name.clone(),
        category: item.category.clone(),
        description: item.description.clone(),
        match_type: best.match_type,
        score,
        matched_text: best.matched_text.to_string(),
    })
}

fn consider<'a>(
    best: &mut Option<BestMatch<'a>>,
    query_norm: &str,
    fuzzy_threshold: usize,
    original: &'a str,
    normalized: &str,
) {
    // empty candidates never match, even within the fuzzy threshold
    if normalized.is_empty() {
        return;
    }
    let Some(c) = classify(query_norm, normalized, fuzzy_threshold) else {
        return;
    };
    if best.as_ref().map_or(true, |b| c.score > b.score) {
        *best = Some(BestMatch {
            match_type: c.match_type,
            score: c.score,
            matched_text: original,
        });
    }
}
