use std::collections::HashMap;

use super::graph::{CENTER_ID, MapGraph, branch_anchor_id};

/// Adjacency over the map's entity ids. Connections appear in both
/// endpoints' lists; the center is adjacent to every branch anchor by
/// definition rather than by explicit connection entries. Built once,
/// read-only afterwards.
#[derive(Clone, Debug)]
pub struct GraphIndex {
    adjacency: HashMap<String, Vec<String>>,
}

impl GraphIndex {
    pub fn build(graph: &MapGraph) -> Self {
        let mut adjacency: HashMap<String, Vec<String>> = HashMap::new();

        for node in &graph.nodes {
            adjacency.entry(node.id.clone()).or_default();
        }
        adjacency.insert(
            CENTER_ID.to_string(),
            graph
                .branch_order
                .iter()
                .map(|key| branch_anchor_id(key))
                .collect(),
        );

        for (a, b) in &graph.connections {
            adjacency.entry(a.clone()).or_default().push(b.clone());
            adjacency.entry(b.clone()).or_default().push(a.clone());
        }

        Self { adjacency }
    }

    /// Unknown ids have no neighbors; lookups never fail.
    pub fn adjacent(&self, id: &str) -> &[String] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}
