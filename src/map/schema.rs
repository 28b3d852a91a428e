use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub(super) struct RawMap {
    pub(super) center: RawCenter,
    pub(super) branches: Vec<RawBranch>,
    pub(super) nodes: Vec<RawNode>,
    #[serde(default)]
    pub(super) connections: Vec<(String, String)>,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct RawCenter {
    pub(super) title: String,
    #[serde(default)]
    pub(super) description: String,
    #[serde(default)]
    pub(super) sources: Vec<RawSource>,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct RawBranch {
    pub(super) key: String,
    pub(super) angle: f32,
    pub(super) color: String,
    pub(super) label: String,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct RawNode {
    pub(super) id: String,
    pub(super) branch: String,
    pub(super) ring: u8,
    pub(super) title: String,
    #[serde(default)]
    pub(super) description: String,
    #[serde(default)]
    pub(super) evidence: Vec<RawEvidence>,
    #[serde(default)]
    pub(super) sources: Vec<RawSource>,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct RawEvidence {
    pub(super) text: String,
    #[serde(default)]
    pub(super) source: String,
    #[serde(default)]
    pub(super) tier: String,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct RawSource {
    pub(super) label: String,
    pub(super) url: String,
}

pub(super) fn parse_map_json(raw: &str) -> Result<RawMap> {
    serde_json::from_str(raw).context("invalid map dataset JSON")
}
