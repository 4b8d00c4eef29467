mod algo;
mod edge;
#[allow(clippy::module_inception)]
mod graph;
mod pass;

pub mod fixtures;

pub use algo::{has_path, reachable_from, topological_sort, SortError};
pub use edge::Edge;
pub use graph::RenderGraph;
pub use pass::{
    AccessType, Pass, PassFlags, Resource, ResourceFlags, ResourceType, PRESENT_PASS_NAME,
    ROOT_PASS_NAME,
};
