use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::map::MapGraph;

pub const SEARCH_RESULT_CAP: usize = 12;

/// Case-insensitive substring match over title, description, and id. The
/// fuzzy matcher only orders the already-filtered candidates (title score,
/// id as fallback); ties keep dataset order. An empty or whitespace query
/// matches nothing.
pub fn search_nodes(graph: &MapGraph, query: &str, limit: usize) -> Vec<String> {
    let query = query.trim().to_lowercase();
    if query.is_empty() || limit == 0 {
        return Vec::new();
    }

    let matcher = SkimMatcherV2::default();
    let mut matches = graph
        .nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| {
            node.title.to_lowercase().contains(&query)
                || node.description.to_lowercase().contains(&query)
                || node.id.to_lowercase().contains(&query)
        })
        .map(|(index, node)| {
            let score = matcher
                .fuzzy_match(&node.title, &query)
                .or_else(|| matcher.fuzzy_match(&node.id, &query))
                .unwrap_or(0);
            (score, index, node.id.clone())
        })
        .collect::<Vec<_>>();

    matches.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
    matches.truncate(limit);
    matches.into_iter().map(|(_, _, id)| id).collect()
}
