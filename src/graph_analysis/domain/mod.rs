pub mod component;
pub mod component_id;
pub mod component_version;
pub mod dependency_graph;

pub use component::{Component, VersionRef};
pub use component_id::{ComponentId, LATEST};
pub use component_version::ComponentVersion;
pub use dependency_graph::{DependencyGraph, EdgeKind};
