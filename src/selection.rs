use std::collections::{HashMap, HashSet};

use crate::map::{CENTER_ID, GraphIndex, MapGraph, branch_anchor_id};

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum FocusState {
    #[default]
    Idle,
    Node(String),
    Branch(String),
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityTier {
    Full,
    Dimmed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeTier {
    /// The resting tier when nothing is focused.
    Default,
    Highlight,
    /// Branch focus only: exactly one endpoint belongs to the branch.
    Partial,
    Dimmed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpokeTier {
    Default,
    /// Center focus: every spoke brightens together.
    Active,
    /// The focused node's or branch's own spoke.
    Elevated,
    Dimmed,
}

/// Visual classification of every entity, edge, and spoke for one focus.
/// Recomputed from scratch on each transition; never patched incrementally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisualState {
    entities: HashMap<String, EntityTier>,
    edges: Vec<EdgeTier>,
    spokes: HashMap<String, SpokeTier>,
}

impl VisualState {
    pub fn compute(focus: &FocusState, graph: &MapGraph, index: &GraphIndex) -> Self {
        match focus {
            FocusState::Idle => Self::uniform(graph, SpokeTier::Default),
            FocusState::Center => Self::uniform(graph, SpokeTier::Active),
            FocusState::Node(id) => Self::for_node(graph, index, id),
            FocusState::Branch(key) => Self::for_branch(graph, key),
        }
    }

    fn uniform(graph: &MapGraph, spoke_tier: SpokeTier) -> Self {
        Self {
            entities: graph
                .entity_ids()
                .map(|id| (id, EntityTier::Full))
                .collect(),
            edges: vec![EdgeTier::Default; graph.connections.len()],
            spokes: graph
                .branch_order
                .iter()
                .map(|key| (key.clone(), spoke_tier))
                .collect(),
        }
    }

    fn for_node(graph: &MapGraph, index: &GraphIndex, id: &str) -> Self {
        // The session refuses to focus unknown ids, but compute stays total.
        let Some(node) = graph.node(id) else {
            return Self::uniform(graph, SpokeTier::Default);
        };

        let mut lit: HashSet<String> = HashSet::new();
        lit.insert(id.to_string());
        lit.extend(index.adjacent(id).iter().cloned());
        lit.insert(branch_anchor_id(&node.branch));

        let entities = graph
            .entity_ids()
            .map(|entity| {
                let tier = if lit.contains(&entity) {
                    EntityTier::Full
                } else {
                    EntityTier::Dimmed
                };
                (entity, tier)
            })
            .collect();

        let edges = graph
            .connections
            .iter()
            .map(|(a, b)| {
                if a == id || b == id {
                    EdgeTier::Highlight
                } else {
                    EdgeTier::Dimmed
                }
            })
            .collect();

        let spokes = graph
            .branch_order
            .iter()
            .map(|key| {
                let tier = if *key == node.branch {
                    SpokeTier::Elevated
                } else {
                    SpokeTier::Dimmed
                };
                (key.clone(), tier)
            })
            .collect();

        Self {
            entities,
            edges,
            spokes,
        }
    }

    fn for_branch(graph: &MapGraph, key: &str) -> Self {
        let members = graph
            .branch_nodes(key)
            .map(|node| node.id.clone())
            .collect::<HashSet<_>>();

        let anchor = branch_anchor_id(key);
        let entities = graph
            .entity_ids()
            .map(|entity| {
                let tier = if members.contains(&entity) || entity == anchor || entity == CENTER_ID
                {
                    EntityTier::Full
                } else {
                    EntityTier::Dimmed
                };
                (entity, tier)
            })
            .collect();

        let edges = graph
            .connections
            .iter()
            .map(|(a, b)| {
                match (members.contains(a), members.contains(b)) {
                    (true, true) => EdgeTier::Highlight,
                    (true, false) | (false, true) => EdgeTier::Partial,
                    (false, false) => EdgeTier::Dimmed,
                }
            })
            .collect();

        let spokes = graph
            .branch_order
            .iter()
            .map(|branch_key| {
                let tier = if branch_key == key {
                    SpokeTier::Elevated
                } else {
                    SpokeTier::Dimmed
                };
                (branch_key.clone(), tier)
            })
            .collect();

        Self {
            entities,
            edges,
            spokes,
        }
    }

    pub fn entity(&self, id: &str) -> EntityTier {
        self.entities
            .get(id)
            .copied()
            .unwrap_or(EntityTier::Dimmed)
    }

    /// Tier of the connection at `index` in the graph's connection list.
    pub fn edge(&self, index: usize) -> EdgeTier {
        self.edges.get(index).copied().unwrap_or(EdgeTier::Default)
    }

    pub fn spoke(&self, key: &str) -> SpokeTier {
        self.spokes.get(key).copied().unwrap_or(SpokeTier::Default)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::testdata;

    fn fixture() -> (MapGraph, GraphIndex) {
        let graph = testdata::two_branch_graph();
        let index = GraphIndex::build(&graph);
        (graph, index)
    }

    #[test]
    fn idle_leaves_everything_at_full_visibility() {
        let (graph, index) = fixture();
        let state = VisualState::compute(&FocusState::Idle, &graph, &index);
        for id in graph.entity_ids() {
            assert_eq!(state.entity(&id), EntityTier::Full);
        }
        assert_eq!(state.edge(0), EdgeTier::Default);
        assert_eq!(state.spoke("b1"), SpokeTier::Default);
    }

    #[test]
    fn center_focus_activates_all_spokes() {
        let (graph, index) = fixture();
        let state = VisualState::compute(&FocusState::Center, &graph, &index);
        for id in graph.entity_ids() {
            assert_eq!(state.entity(&id), EntityTier::Full);
        }
        assert_eq!(state.spoke("b1"), SpokeTier::Active);
        assert_eq!(state.spoke("b2"), SpokeTier::Active);
    }

    #[test]
    fn node_focus_lights_neighbors_and_own_branch_anchor() {
        let (graph, index) = fixture();
        let state = VisualState::compute(&FocusState::Node("n1".to_string()), &graph, &index);

        assert_eq!(state.entity("n1"), EntityTier::Full);
        assert_eq!(state.entity("n2"), EntityTier::Full);
        assert_eq!(state.entity("branch-b1"), EntityTier::Full);
        assert_eq!(state.entity("m1"), EntityTier::Dimmed);
        assert_eq!(state.entity("branch-b2"), EntityTier::Dimmed);
        assert_eq!(state.entity(CENTER_ID), EntityTier::Dimmed);

        assert_eq!(state.edge(0), EdgeTier::Highlight);
        assert_eq!(state.spoke("b1"), SpokeTier::Elevated);
        assert_eq!(state.spoke("b2"), SpokeTier::Dimmed);
    }

    #[test]
    fn branch_focus_classifies_edges_by_membership() {
        let graph = testdata::graph(
            vec![testdata::branch("b1", 0.0), testdata::branch("b2", 90.0)],
            vec![
                testdata::node("n1", "b1", 1),
                testdata::node("n2", "b1", 1),
                testdata::node("m1", "b2", 1),
                testdata::node("m2", "b2", 2),
            ],
            vec![("n1", "n2"), ("n2", "m1"), ("m1", "m2")],
        );
        let index = GraphIndex::build(&graph);
        let state = VisualState::compute(&FocusState::Branch("b1".to_string()), &graph, &index);

        assert_eq!(state.edge(0), EdgeTier::Highlight);
        assert_eq!(state.edge(1), EdgeTier::Partial);
        assert_eq!(state.edge(2), EdgeTier::Dimmed);

        assert_eq!(state.entity("n1"), EntityTier::Full);
        assert_eq!(state.entity("branch-b1"), EntityTier::Full);
        assert_eq!(state.entity(CENTER_ID), EntityTier::Full);
        assert_eq!(state.entity("m1"), EntityTier::Dimmed);
        assert_eq!(state.spoke("b1"), SpokeTier::Elevated);
    }

    #[test]
    fn computation_is_deterministic_and_idempotent() {
        let (graph, index) = fixture();
        let focus = FocusState::Node("n1".to_string());
        let first = VisualState::compute(&focus, &graph, &index);
        let second = VisualState::compute(&focus, &graph, &index);
        assert_eq!(first, second);
    }

    #[test]
    fn every_entity_and_edge_is_classified() {
        let (graph, index) = fixture();
        let state = VisualState::compute(&FocusState::Node("n1".to_string()), &graph, &index);
        assert_eq!(state.entity_count(), graph.entity_ids().count());
        assert_eq!(state.edge_count(), graph.connections.len());
        for index in 0..state.edge_count() {
            assert_ne!(state.edge(index), EdgeTier::Default);
        }
    }
}
