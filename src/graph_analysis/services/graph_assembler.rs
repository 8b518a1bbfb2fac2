use crate::graph_analysis::domain::{Component, ComponentVersion, DependencyGraph, EdgeKind};
use crate::shared::Result;

/// Everything one component's loading task produced
///
/// Each concurrent task returns its own contribution; the assembler folds
/// them into the graph once every task has settled.
#[derive(Debug, Clone)]
pub struct ComponentContribution {
    pub component: Component,
    /// Loaded versions keyed by the declared label they were requested under
    pub versions: Vec<(String, ComponentVersion)>,
}

impl ComponentContribution {
    pub fn new(component: Component, versions: Vec<(String, ComponentVersion)>) -> Self {
        Self {
            component,
            versions,
        }
    }
}

/// GraphAssembler service folding loaded contributions into a graph
///
/// Pure logic, no I/O. Nodes are registered first and edges only after
/// every node is in place.
pub struct GraphAssembler;

impl GraphAssembler {
    /// Builds the compound dependency graph from loaded contributions
    ///
    /// # Arguments
    /// * `contributions` - One entry per component listed by the repository
    /// * `include_dev_dependencies` - Also add `dev-require` edges for
    ///   flattened dev dependencies
    pub fn assemble(
        contributions: Vec<ComponentContribution>,
        include_dev_dependencies: bool,
    ) -> Result<DependencyGraph> {
        let mut graph = DependencyGraph::new();
        let mut pending_edges: Vec<(String, String, EdgeKind)> = Vec::new();

        for contribution in contributions {
            let component = contribution.component;
            let component_key = component.key();
            let component_id = component.id().clone();
            graph.add_component(component);

            for (label, mut version) in contribution.versions {
                version.set_id(&component_id);
                let version_key = component_id.with_version(&label).to_string_with_version();

                pending_edges.extend(version.flattened_dependencies().iter().map(|dep| {
                    (
                        version_key.clone(),
                        dep.to_string_with_version(),
                        EdgeKind::Require,
                    )
                }));
                if include_dev_dependencies {
                    pending_edges.extend(version.flattened_dev_dependencies().iter().map(
                        |dep| {
                            (
                                version_key.clone(),
                                dep.to_string_with_version(),
                                EdgeKind::DevRequire,
                            )
                        },
                    ));
                }

                graph.add_version(&component_key, version_key, version)?;
            }
        }

        for (source, target, kind) in pending_edges {
            graph.add_edge(&source, &target, kind);
        }

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_analysis::domain::{ComponentId, VersionRef};
    use std::collections::BTreeMap;

    fn id(s: &str) -> ComponentId {
        ComponentId::parse(s).unwrap()
    }

    fn component(name: &str, labels: &[&str]) -> Component {
        let versions: BTreeMap<String, VersionRef> = labels
            .iter()
            .map(|l| (l.to_string(), VersionRef::new(format!("{}-{}", name, l))))
            .collect();
        Component::new(id(name), versions)
    }

    fn contributions() -> Vec<ComponentContribution> {
        vec![
            ComponentContribution::new(
                component("scope/a", &["1.0.0", "2.0.0"]),
                vec![
                    (
                        "1.0.0".to_string(),
                        ComponentVersion::new("1.0.0".to_string(), vec![]),
                    ),
                    (
                        "2.0.0".to_string(),
                        ComponentVersion::new("2.0.0".to_string(), vec![id("scope/b@1.0.0")])
                            .with_dev_dependencies(vec![id("scope/test-kit@0.1.0")]),
                    ),
                ],
            ),
            ComponentContribution::new(
                component("scope/b", &["1.0.0"]),
                vec![(
                    "1.0.0".to_string(),
                    ComponentVersion::new("1.0.0".to_string(), vec![]),
                )],
            ),
        ]
    }

    #[test]
    fn test_assemble_registers_nodes_and_edges() {
        let graph = GraphAssembler::assemble(contributions(), false).unwrap();

        assert_eq!(graph.component_count(), 2);
        assert_eq!(graph.version_count(), 3);
        assert_eq!(graph.edge_count(), 1);

        let preds: Vec<&str> = graph.predecessors("scope/b@1.0.0").collect();
        assert_eq!(preds, vec!["scope/a@2.0.0"]);
        assert_eq!(graph.in_edges("scope/b@1.0.0")[0].kind, EdgeKind::Require);
    }

    #[test]
    fn test_assemble_stamps_owning_id() {
        let graph = GraphAssembler::assemble(contributions(), false).unwrap();
        let version = graph.version_node("scope/a@2.0.0").unwrap();
        assert_eq!(version.id().unwrap(), &id("scope/a"));
        let children: Vec<&str> = graph.children("scope/a").collect();
        assert!(children.contains(&"scope/a@2.0.0"));
    }

    #[test]
    fn test_assemble_with_dev_dependencies() {
        let graph = GraphAssembler::assemble(contributions(), true).unwrap();
        assert_eq!(graph.edge_count(), 2);
        let edges = graph.in_edges("scope/test-kit@0.1.0");
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].kind, EdgeKind::DevRequire);
    }

    #[test]
    fn test_assemble_component_without_loaded_versions() {
        let graph = GraphAssembler::assemble(
            vec![ComponentContribution::new(
                component("scope/empty", &["1.0.0"]),
                vec![],
            )],
            false,
        )
        .unwrap();

        assert_eq!(graph.component_count(), 1);
        assert_eq!(graph.version_count(), 0);
        assert_eq!(graph.children("scope/empty").count(), 0);
    }

    #[test]
    fn test_assemble_edge_to_component_listed_later() {
        // Edge targets are resolved after all nodes, independent of listing order
        let mut reversed = contributions();
        reversed.reverse();
        let graph = GraphAssembler::assemble(reversed, false).unwrap();
        assert_eq!(graph.predecessors("scope/b@1.0.0").count(), 1);
    }
}
