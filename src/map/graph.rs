use std::collections::HashMap;

pub const CENTER_ID: &str = "center";

/// Synthetic entity id for a branch's anchor circle. Anchors share the id
/// space with topic nodes and the center so visual state can address them.
pub fn branch_anchor_id(key: &str) -> String {
    format!("branch-{key}")
}

#[derive(Clone, Debug)]
pub struct TopicNode {
    pub id: String,
    pub branch: String,
    pub ring: u8,
    pub title: String,
    pub description: String,
    pub evidence: Vec<Evidence>,
    pub sources: Vec<SourceLink>,
}

#[derive(Clone, Debug)]
pub struct Evidence {
    pub text: String,
    pub source: String,
    pub tier: String,
}

#[derive(Clone, Debug)]
pub struct SourceLink {
    pub label: String,
    pub url: String,
}

#[derive(Clone, Debug)]
pub struct Branch {
    pub key: String,
    pub angle: f32,
    pub color: String,
    pub label: String,
}

#[derive(Clone, Debug)]
pub struct CenterInfo {
    pub title: String,
    pub description: String,
    pub sources: Vec<SourceLink>,
}

/// Immutable knowledge map: loaded once at startup, never mutated afterwards.
#[derive(Clone, Debug)]
pub struct MapGraph {
    pub center: CenterInfo,
    pub branches: HashMap<String, Branch>,
    /// Branch keys ordered by display angle, then key. Every iteration over
    /// branches goes through this list so output is independent of hash order.
    pub branch_order: Vec<String>,
    /// Nodes in dataset order; layout within a branch follows this order.
    pub nodes: Vec<TopicNode>,
    pub node_index: HashMap<String, usize>,
    /// Retained connections: both endpoints are known node ids.
    pub connections: Vec<(String, String)>,
    pub dropped_connections: usize,
}

impl MapGraph {
    pub fn node(&self, id: &str) -> Option<&TopicNode> {
        self.node_index.get(id).map(|&index| &self.nodes[index])
    }

    pub fn branch(&self, key: &str) -> Option<&Branch> {
        self.branches.get(key)
    }

    pub fn branch_nodes<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a TopicNode> {
        self.nodes.iter().filter(move |node| node.branch == key)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn branch_count(&self) -> usize {
        self.branch_order.len()
    }

    /// All ids that carry a drawn element: every node, every branch anchor,
    /// and the center.
    pub fn entity_ids(&self) -> impl Iterator<Item = String> + '_ {
        self.nodes
            .iter()
            .map(|node| node.id.clone())
            .chain(self.branch_order.iter().map(|key| branch_anchor_id(key)))
            .chain(std::iter::once(CENTER_ID.to_string()))
    }
}

#[cfg(test)]
pub(crate) mod testdata {
    use super::*;

    pub(crate) fn node(id: &str, branch: &str, ring: u8) -> TopicNode {
        TopicNode {
            id: id.to_string(),
            branch: branch.to_string(),
            ring,
            title: format!("Title {id}"),
            description: format!("Description of {id}"),
            evidence: Vec::new(),
            sources: Vec::new(),
        }
    }

    pub(crate) fn branch(key: &str, angle: f32) -> Branch {
        Branch {
            key: key.to_string(),
            angle,
            color: "#3399ff".to_string(),
            label: key.to_uppercase(),
        }
    }

    pub(crate) fn graph(
        branches: Vec<Branch>,
        nodes: Vec<TopicNode>,
        connections: Vec<(&str, &str)>,
    ) -> MapGraph {
        let mut branch_order = branches.iter().map(|b| b.key.clone()).collect::<Vec<_>>();
        branch_order.sort_by(|a, b| {
            let angle_a = branches.iter().find(|b2| &b2.key == a).map(|b2| b2.angle);
            let angle_b = branches.iter().find(|b2| &b2.key == b).map(|b2| b2.angle);
            angle_a.partial_cmp(&angle_b).unwrap().then_with(|| a.cmp(b))
        });
        let branches = branches
            .into_iter()
            .map(|branch| (branch.key.clone(), branch))
            .collect::<HashMap<_, _>>();
        let node_index = nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (node.id.clone(), index))
            .collect::<HashMap<_, _>>();
        let connections = connections
            .into_iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect();

        MapGraph {
            center: CenterInfo {
                title: "Center".to_string(),
                description: "The center of the map".to_string(),
                sources: Vec::new(),
            },
            branches,
            branch_order,
            nodes,
            node_index,
            connections,
            dropped_connections: 0,
        }
    }

    /// The two-node scenario used across the selection and session tests:
    /// branch `b1` at 0 degrees with ring-1 nodes `n1`, `n2` connected to
    /// each other, plus a second branch `b2` with one unconnected node `m1`.
    pub(crate) fn two_branch_graph() -> MapGraph {
        graph(
            vec![branch("b1", 0.0), branch("b2", 90.0)],
            vec![
                node("n1", "b1", 1),
                node("n2", "b1", 1),
                node("m1", "b2", 1),
            ],
            vec![("n1", "n2")],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_ids_cover_nodes_anchors_and_center() {
        let graph = testdata::two_branch_graph();
        let ids = graph.entity_ids().collect::<Vec<_>>();
        assert_eq!(ids.len(), 3 + 2 + 1);
        assert!(ids.contains(&"n1".to_string()));
        assert!(ids.contains(&"branch-b2".to_string()));
        assert!(ids.contains(&CENTER_ID.to_string()));
    }

    #[test]
    fn branch_nodes_preserve_dataset_order() {
        let graph = testdata::two_branch_graph();
        let ids = graph
            .branch_nodes("b1")
            .map(|node| node.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, ["n1", "n2"]);
    }
}
