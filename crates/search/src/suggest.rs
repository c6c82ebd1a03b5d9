//! Query evaluation, ranking and the empty-query fallback.

use crate::scanner::best_match_for_item;
use crate::{normalize, MatchType, SearchConfig, SearchSuggestion, SearchableItem};

/// Score assigned to curated popular suggestions.
pub const POPULAR_SCORE: u32 = 100;

/// Turn a free-text query into ranked suggestions.
///
/// The query is normalized once, every item is scanned for its best
/// match, and the results are ranked and capped at
/// `config.max_suggestions`. A query that is empty after trimming yields
/// no suggestions; pair it with [`popular_suggestions`] instead.
///
/// # Example
/// ```
/// use glowbook_search::{smart_search, MatchType, SearchConfig, SearchableItem};
///
/// let items = vec![SearchableItem::new(
///     "1", "Manicure de Gel", "nails", "Manicure con esmalte en gel",
/// )];
///
/// let results = smart_search("manicure de gel", &items, &SearchConfig::default());
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].match_type, MatchType::Exact);
/// ```
pub fn smart_search(query: &str, items: &[SearchableItem], config: &SearchConfig) -> Vec<SearchSuggestion> {
    let query_norm = normalize(query);
    if query_norm.is_empty() {
        return Vec::new();
    }

    let matches = scan_items(&query_norm, items, config);
    let found = matches.len();
    let ranked = rank(matches, config.max_suggestions);

    tracing::debug!(
        query = %query_norm,
        items = items.len(),
        matched = found,
        returned = ranked.len(),
        "search evaluated"
    );

    ranked
}

/// Sort suggestions by descending score and keep the first `max_suggestions`.
///
/// The sort is stable: equal scores keep their discovery order.
pub fn rank(mut suggestions: Vec<SearchSuggestion>, max_suggestions: usize) -> Vec<SearchSuggestion> {
    suggestions.sort_by(|a, b| b.score.cmp(&a.score));
    suggestions.truncate(max_suggestions);
    suggestions
}

/// Curated suggestions for when nothing has been typed yet.
///
/// Takes popular-flagged items in catalog order, up to `limit`.
pub fn popular_suggestions(items: &[SearchableItem], limit: usize) -> Vec<SearchSuggestion> {
    items
        .iter()
        .filter(|item| item.is_popular())
        .take(limit)
        .map(|item| SearchSuggestion {
            id: item.id.clone(),
            name: item.name.clone(),
            category: item.category.clone(),
            description: item.description.clone(),
            match_type: MatchType::Exact,
            score: POPULAR_SCORE,
            matched_text: item.name.clone(),
        })
        .collect()
}

/// Best match per item, in catalog order.
fn scan_items(query_norm: &str, items: &[SearchableItem], config: &SearchConfig) -> Vec<SearchSuggestion> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        items
            .par_iter()
            .filter_map(|item| best_match_for_item(item, query_norm, config))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        items
            .iter()
            .filter_map(|item| best_match_for_item(item, query_norm, config))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn manicure() -> SearchableItem {
        SearchableItem::new("1", "Manicure de Gel", "nails", "Manicure con esmalte en gel")
    }

    fn salon_catalog() -> Vec<SearchableItem> {
        vec![
            manicure(),
            SearchableItem::new("2", "Pedicure Spa", "nails", "Pedicure completa con exfoliación")
                .popular(true),
            SearchableItem::new("3", "Lifting de Pestañas", "lashes", "Curvado natural de pestañas")
                .with_synonyms(["lash lift", "pestañas"])
                .popular(true),
            SearchableItem::new("4", "Corte de Cabello", "hair", "Corte y peinado"),
            SearchableItem::new("5", "Tinte", "hair", "Coloración completa").popular(true),
            SearchableItem::new("6", "Laura Gómez", "professional", "Especialista en uñas"),
            SearchableItem::new("7", "Esmalte Rojo", "product", "Esmalte de uñas"),
            SearchableItem::new("8", "Depilación con Cera", "waxing", "Cera tibia"),
            SearchableItem::new("9", "Masaje Relajante", "spa", "Masaje de 60 minutos"),
            SearchableItem::new("10", "Maquillaje", "makeup", "Maquillaje social"),
        ]
    }

    #[test]
    fn test_exact_query() {
        let results = smart_search("Manicure de Gel", &[manicure()], &SearchConfig::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].match_type, MatchType::Exact);
        // exact 100 plus the short-text bonus
        assert_eq!(results[0].score, 110);
        assert!(results[0].score >= 100);
    }

    #[test]
    fn test_prefix_query() {
        let results = smart_search("mani", &[manicure()], &SearchConfig::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].match_type, MatchType::StartsWith);
        assert_eq!(results[0].score, 80 - 2 * (15 - 4));
    }

    #[test]
    fn test_unrelated_query() {
        assert!(smart_search("xyz", &[manicure()], &SearchConfig::default()).is_empty());
    }

    #[test]
    fn test_empty_query() {
        assert!(smart_search("", &salon_catalog(), &SearchConfig::default()).is_empty());
        assert!(smart_search("   ", &salon_catalog(), &SearchConfig::default()).is_empty());
    }

    #[test]
    fn test_accent_and_case_insensitive() {
        let results = smart_search("DEPILACION", &salon_catalog(), &SearchConfig::default());
        assert_eq!(results[0].id, "8");
        assert_eq!(results[0].matched_text, "Depilación con Cera");
    }

    #[test]
    fn test_typo_tolerance() {
        let results = smart_search("tinde", &salon_catalog(), &SearchConfig::default());
        assert_eq!(results[0].id, "5");
        assert_eq!(results[0].match_type, MatchType::Fuzzy);
    }

    #[test]
    fn test_ranked_descending() {
        let results = smart_search("ma", &salon_catalog(), &SearchConfig::default());
        assert!(!results.is_empty());
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_cap_respected() {
        let config = SearchConfig::default().with_max_suggestions(2);
        let results = smart_search("a", &salon_catalog(), &config);
        assert_eq!(results.len(), 2);

        let none = SearchConfig::default().with_max_suggestions(0);
        assert!(smart_search("a", &salon_catalog(), &none).is_empty());
    }

    #[test]
    fn test_rank_stable_by_discovery_order() {
        let make = |id: &str, score| SearchSuggestion {
            id: id.to_string(),
            name: id.to_string(),
            category: String::new(),
            description: String::new(),
            match_type: MatchType::Contains,
            score,
            matched_text: id.to_string(),
        };
        let ranked = rank(vec![make("a", 40), make("b", 70), make("c", 40), make("d", 70)], 10);
        let ids: Vec<_> = ranked.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["b", "d", "a", "c"]);
    }

    #[test]
    fn test_equal_scores_follow_catalog_order() {
        let items = vec![
            SearchableItem::new("x", "Gel", "", ""),
            SearchableItem::new("y", "gel", "", ""),
            SearchableItem::new("z", "GEL", "", ""),
        ];
        let results = smart_search("gel", &items, &SearchConfig::default());
        let ids: Vec<_> = results.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["x", "y", "z"]);
    }

    #[test]
    fn test_popular_suggestions() {
        let items = salon_catalog();
        let popular = popular_suggestions(&items, 2);
        assert_eq!(popular.len(), 2);
        assert_eq!(popular[0].id, "2");
        assert_eq!(popular[1].id, "3");
        assert!(popular.iter().all(|s| s.score == 100 && s.match_type == MatchType::Exact));
        assert_eq!(popular[1].matched_text, "Lifting de Pestañas");
    }

    #[test]
    fn test_popular_limit_exceeds_flagged() {
        assert_eq!(popular_suggestions(&salon_catalog(), 10).len(), 3);
        assert!(popular_suggestions(&salon_catalog(), 0).is_empty());
    }

    fn arb_item() -> impl Strategy<Value = SearchableItem> {
        ("[a-z0-9]{1,4}", "[a-zñé ]{0,16}", "[a-z]{0,8}", "[a-z ]{0,20}").prop_map(
            |(id, name, category, description)| SearchableItem::new(id, name, category, description),
        )
    }

    proptest! {
        #[test]
        fn prop_cap_and_uniqueness(
            raw in prop::collection::vec(arb_item(), 0..20),
            query in "[a-z]{1,5}",
            k in 0usize..10,
        ) {
            // ids made unique by position
            let items: Vec<SearchableItem> = raw
                .into_iter()
                .enumerate()
                .map(|(i, mut item)| { item.id = format!("{i}-{}", item.id); item })
                .collect();
            let config = SearchConfig { max_suggestions: k, ..SearchConfig::default() };
            let results = smart_search(&query, &items, &config);

            prop_assert!(results.len() <= k);
            let ids: HashSet<_> = results.iter().map(|s| s.id.clone()).collect();
            prop_assert_eq!(ids.len(), results.len());
            prop_assert!(results.iter().all(|s| s.score > 0));
        }
    }
}
