//! Search query generation.
//!
//! Derives a small, ordered set of query strings from the request. The
//! precedence is fixed: the bare brand always comes first, comparison and
//! recommendation queries follow only when their inputs exist. Aliases do
//! not contribute queries; they only widen relevance matching downstream.

use std::collections::HashSet;

/// Builds the ordered query list, deduplicated case-insensitively (first
/// occurrence wins) and truncated to `max_queries`.
pub(crate) fn build_search_queries(
    brand: &str,
    competitors: &[String],
    keywords: &[String],
    max_queries: usize,
) -> Vec<String> {
    let mut queries = vec![brand.to_string()];

    if let Some(keyword) = keywords.first() {
        queries.push(format!("{brand} {keyword}"));
    }

    if !competitors.is_empty() {
        let rivals = competitors
            .iter()
            .take(2)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");
        queries.push(format!("{brand} vs {rivals}"));
    }

    match keywords {
        [first, second, ..] => queries.push(format!("{first} {second} recommendation")),
        [only] => queries.push(format!("{only} recommendation")),
        [] => {}
    }

    if let (Some(competitor), Some(keyword)) = (competitors.first(), keywords.first()) {
        queries.push(format!("{competitor} {keyword}"));
    }

    // Collapse duplicates while preserving order.
    let mut seen = HashSet::new();
    queries.retain(|q| seen.insert(q.to_lowercase()));
    queries.truncate(max_queries);
    queries
}
