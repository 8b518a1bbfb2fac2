//! Builder for constructing views from graph nodes

use super::component_view::{ComponentView, VersionView};
use crate::graph_analysis::domain::{Component, ComponentVersion, DependencyGraph};
use crate::graph_analysis::policies::LatestVersionPolicy;

/// Transforms graph nodes into serializable views
pub struct ViewBuilder;

impl ViewBuilder {
    /// Builds the view of a component node
    pub fn component(graph: &DependencyGraph, component: &Component) -> ComponentView {
        let declared_versions: Vec<String> =
            component.version_labels().map(str::to_string).collect();
        let loaded_versions = component
            .version_labels()
            .filter(|label| graph.version_node(&component.version_key(label)).is_some())
            .map(str::to_string)
            .collect();
        let latest = LatestVersionPolicy::select(component.version_labels()).map(str::to_string);

        ComponentView {
            id: component.key(),
            declared_versions,
            loaded_versions,
            latest,
        }
    }

    /// Builds the view of a version node
    ///
    /// Versions without a stamped owner cannot be keyed and yield `None`.
    pub fn version(graph: &DependencyGraph, version: &ComponentVersion) -> Option<VersionView> {
        let key = version.versioned_id()?.to_string_with_version();
        let mut dependents: Vec<String> =
            graph.predecessors(&key).map(str::to_string).collect();
        dependents.sort();

        Some(VersionView {
            id: key,
            version: version.label().to_string(),
            dependencies: version
                .flattened_dependencies()
                .iter()
                .map(|dep| dep.to_string_with_version())
                .collect(),
            dev_dependencies: version
                .flattened_dev_dependencies()
                .iter()
                .map(|dep| dep.to_string_with_version())
                .collect(),
            dependents,
            message: version.message().map(str::to_string),
        })
    }
}
