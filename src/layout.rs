use std::collections::HashMap;

use eframe::egui::{Pos2, pos2};

use crate::map::{CENTER_ID, MapGraph, TopicNode, branch_anchor_id};

pub const CENTER_RADIUS: f32 = 80.0;
pub const BRANCH_RADIUS: f32 = 32.0;
pub const TOPIC_RADIUS: f32 = 14.0;
pub const RING1_DISTANCE: f32 = 280.0;
pub const RING2_DISTANCE: f32 = 440.0;
pub const BRANCH_RING: f32 = 180.0;
/// How far the faint spoke extension overshoots ring 2.
pub const SPOKE_OVERSHOOT: f32 = 60.0;

const RING1_SPREAD_CAP: f32 = 18.0;
const RING1_ANGULAR_BUDGET: f32 = 40.0;
const RING2_SPREAD_CAP: f32 = 14.0;
const RING2_ANGULAR_BUDGET: f32 = 36.0;

/// Positions for every entity id: the center, each branch anchor, and each
/// topic node. A pure function of the dataset; recomputation always yields
/// identical output.
#[derive(Clone, Debug)]
pub struct RadialLayout {
    positions: HashMap<String, Pos2>,
}

impl RadialLayout {
    pub fn compute(graph: &MapGraph) -> Self {
        let mut positions = HashMap::with_capacity(graph.node_count() + graph.branch_count() + 1);
        positions.insert(CENTER_ID.to_string(), pos2(0.0, 0.0));

        for key in &graph.branch_order {
            let branch = &graph.branches[key];
            positions.insert(branch_anchor_id(key), polar(branch.angle, BRANCH_RING));

            let ring1 = graph
                .branch_nodes(key)
                .filter(|node| node.ring == 1)
                .collect::<Vec<_>>();
            let ring2 = graph
                .branch_nodes(key)
                .filter(|node| node.ring == 2)
                .collect::<Vec<_>>();

            place_ring(
                &mut positions,
                &ring1,
                branch.angle,
                RING1_DISTANCE,
                RING1_SPREAD_CAP,
                RING1_ANGULAR_BUDGET,
            );
            place_ring(
                &mut positions,
                &ring2,
                branch.angle,
                RING2_DISTANCE,
                RING2_SPREAD_CAP,
                RING2_ANGULAR_BUDGET,
            );
        }

        Self { positions }
    }

    pub fn position(&self, id: &str) -> Option<Pos2> {
        self.positions.get(id).copied()
    }

    pub fn position_count(&self) -> usize {
        self.positions.len()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.positions.keys().map(String::as_str)
    }
}

/// Nodes spread symmetrically around the branch's base angle: the spread
/// shrinks as the ring fills up but never exceeds the per-ring cap.
fn place_ring(
    positions: &mut HashMap<String, Pos2>,
    nodes: &[&TopicNode],
    base_angle: f32,
    distance: f32,
    spread_cap: f32,
    angular_budget: f32,
) {
    let count = nodes.len();
    let spread = spread_cap.min(angular_budget / count.max(1) as f32);
    let start = base_angle - ((count as f32 - 1.0) * spread) / 2.0;

    for (index, node) in nodes.iter().enumerate() {
        let angle = start + index as f32 * spread;
        positions.insert(node.id.clone(), polar(angle, distance));
    }
}

fn polar(angle_degrees: f32, distance: f32) -> Pos2 {
    let radians = angle_degrees.to_radians();
    pos2(radians.cos() * distance, radians.sin() * distance)
}
