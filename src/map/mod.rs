mod graph;
mod index;
mod load;
mod schema;

pub use graph::{
    Branch, CENTER_ID, CenterInfo, Evidence, MapGraph, SourceLink, TopicNode, branch_anchor_id,
};
pub use index::GraphIndex;
pub use load::load_map_file;

#[cfg(test)]
pub(crate) use graph::testdata;
