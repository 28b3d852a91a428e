use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Result, anyhow};

use super::graph::{Branch, CenterInfo, Evidence, MapGraph, SourceLink, TopicNode};
use super::schema::{RawMap, parse_map_json};

pub fn load_map_file(path: &Path) -> Result<MapGraph> {
    let raw = fs::read_to_string(path)
        .map_err(|error| anyhow!("failed to read map dataset {}: {error}", path.display()))?;
    let parsed = parse_map_json(&raw)?;
    build_map_graph(parsed)
}

pub(super) fn build_map_graph(raw: RawMap) -> Result<MapGraph> {
    if raw.branches.is_empty() {
        return Err(anyhow!("map dataset declares no branches"));
    }

    let mut branches = HashMap::with_capacity(raw.branches.len());
    let mut branch_order = Vec::with_capacity(raw.branches.len());
    for raw_branch in raw.branches {
        if !(0.0..360.0).contains(&raw_branch.angle) {
            return Err(anyhow!(
                "branch {} has angle {} outside [0, 360)",
                raw_branch.key,
                raw_branch.angle
            ));
        }
        if branches.contains_key(&raw_branch.key) {
            return Err(anyhow!("duplicate branch key {}", raw_branch.key));
        }

        branch_order.push(raw_branch.key.clone());
        branches.insert(
            raw_branch.key.clone(),
            Branch {
                key: raw_branch.key,
                angle: raw_branch.angle,
                color: raw_branch.color,
                label: raw_branch.label,
            },
        );
    }
    branch_order.sort_by(|a, b| {
        let angle_a = branches[a].angle;
        let angle_b = branches[b].angle;
        angle_a.total_cmp(&angle_b).then_with(|| a.cmp(b))
    });

    let mut nodes = Vec::with_capacity(raw.nodes.len());
    let mut node_index = HashMap::with_capacity(raw.nodes.len());
    for raw_node in raw.nodes {
        if !branches.contains_key(&raw_node.branch) {
            return Err(anyhow!(
                "node {} references unknown branch {}",
                raw_node.id,
                raw_node.branch
            ));
        }
        if !matches!(raw_node.ring, 1 | 2) {
            return Err(anyhow!(
                "node {} has ring {}; only rings 1 and 2 exist",
                raw_node.id,
                raw_node.ring
            ));
        }
        if node_index.contains_key(&raw_node.id) {
            return Err(anyhow!("duplicate node id {}", raw_node.id));
        }

        node_index.insert(raw_node.id.clone(), nodes.len());
        nodes.push(TopicNode {
            id: raw_node.id,
            branch: raw_node.branch,
            ring: raw_node.ring,
            title: raw_node.title,
            description: raw_node.description,
            evidence: raw_node
                .evidence
                .into_iter()
                .map(|entry| Evidence {
                    text: entry.text,
                    source: entry.source,
                    tier: entry.tier,
                })
                .collect(),
            sources: raw_node
                .sources
                .into_iter()
                .map(|entry| SourceLink {
                    label: entry.label,
                    url: entry.url,
                })
                .collect(),
        });
    }

    // Dangling or self-referential connections would render nothing, so they
    // are dropped with a count rather than treated as fatal.
    let mut connections = Vec::with_capacity(raw.connections.len());
    let mut dropped_connections = 0usize;
    for (a, b) in raw.connections {
        if a != b && node_index.contains_key(&a) && node_index.contains_key(&b) {
            connections.push((a, b));
        } else {
            dropped_connections += 1;
        }
    }

    Ok(MapGraph {
        center: CenterInfo {
            title: raw.center.title,
            description: raw.center.description,
            sources: raw
                .center
                .sources
                .into_iter()
                .map(|entry| SourceLink {
                    label: entry.label,
                    url: entry.url,
                })
                .collect(),
        },
        branches,
        branch_order,
        nodes,
        node_index,
        connections,
        dropped_connections,
    })
}
