use super::{Component, ComponentId, ComponentVersion};
use crate::graph_analysis::policies::LatestVersionPolicy;
use crate::shared::error::GraphError;
use crate::shared::Result;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Kind of a dependency edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Runtime dependency
    Require,
    /// Development-only dependency
    DevRequire,
}

impl EdgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::Require => "require",
            EdgeKind::DevRequire => "dev-require",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Directed edge from a dependent version key to a dependency version key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
}

/// DependencyGraph aggregate over a whole scope
///
/// Compound structure is kept as plain maps: component nodes, version nodes
/// and the child set of each component.
/// Edges are indexed both by source and by target. Edge targets do not have
/// to be registered nodes.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    components: HashMap<String, Component>,
    versions: HashMap<String, ComponentVersion>,
    children: HashMap<String, BTreeSet<String>>,
    out_edges: HashMap<String, Vec<Edge>>,
    in_edges: HashMap<String, Vec<Edge>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a component node under its without-version key
    pub fn add_component(&mut self, component: Component) {
        let key = component.key();
        self.children.entry(key.clone()).or_default();
        self.components.insert(key, component);
    }

    /// Registers a version node as a child of `parent_key`
    ///
    /// # Errors
    /// Returns an error if the parent component node is not registered
    pub fn add_version(
        &mut self,
        parent_key: &str,
        version_key: String,
        version: ComponentVersion,
    ) -> Result<()> {
        if !self.components.contains_key(parent_key) {
            return Err(GraphError::MissingParent {
                version: version_key,
                parent: parent_key.to_string(),
            }
            .into());
        }

        self.children
            .entry(parent_key.to_string())
            .or_default()
            .insert(version_key.clone());
        self.versions.insert(version_key, version);
        Ok(())
    }

    /// Adds an edge unless one already connects `source` to `target`
    ///
    /// # Returns
    /// `true` when a new edge was inserted
    pub fn add_edge(&mut self, source: &str, target: &str, kind: EdgeKind) -> bool {
        let outgoing = self.out_edges.entry(source.to_string()).or_default();
        if outgoing.iter().any(|edge| edge.target == target) {
            return false;
        }

        let edge = Edge {
            source: source.to_string(),
            target: target.to_string(),
            kind,
        };
        outgoing.push(edge.clone());
        self.in_edges
            .entry(target.to_string())
            .or_default()
            .push(edge);
        true
    }

    pub fn component_node(&self, key: &str) -> Option<&Component> {
        self.components.get(key)
    }

    pub fn version_node(&self, key: &str) -> Option<&ComponentVersion> {
        self.versions.get(key)
    }

    /// Version node keys contained in the component node `key`
    pub fn children(&self, key: &str) -> impl Iterator<Item = &str> {
        self.children
            .get(key)
            .into_iter()
            .flat_map(|children| children.iter().map(String::as_str))
    }

    /// Keys of nodes holding an edge into `key`
    pub fn predecessors(&self, key: &str) -> impl Iterator<Item = &str> {
        self.in_edges
            .get(key)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|edge| edge.source.as_str()))
    }

    pub fn in_edges(&self, key: &str) -> &[Edge] {
        self.in_edges.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn version_count(&self) -> usize {
        self.versions.len()
    }

    pub fn edge_count(&self) -> usize {
        self.out_edges.values().map(Vec::len).sum()
    }

    /// Looks up a component by the identifier's without-version key
    pub fn get_component(&self, id: &ComponentId) -> Option<&Component> {
        self.component_node(&id.to_string_without_version())
    }

    /// Looks up a version, resolving the latest sentinel when requested
    pub fn get_component_version(&self, id: &ComponentId) -> Option<&ComponentVersion> {
        if id.is_latest() {
            return self.latest_version(id);
        }
        self.version_node(&id.to_string_with_version())
    }

    /// Resolves every declared version of the component
    ///
    /// # Returns
    /// `None` when the component is not registered, otherwise the versions
    /// that resolved, in declared-label order. Declared labels with no
    /// loaded version are dropped.
    pub fn get_component_versions(&self, id: &ComponentId) -> Option<Vec<&ComponentVersion>> {
        let component = self.get_component(id)?;
        let versions = component
            .version_labels()
            .filter_map(|label| self.get_component_version(&component.id().with_version(label)))
            .collect();
        Some(versions)
    }

    /// Resolves the highest semver version among the declared labels of the
    /// component named by `id`
    pub fn latest_version(&self, id: &ComponentId) -> Option<&ComponentVersion> {
        let component = self.get_component(id)?;
        let label = LatestVersionPolicy::select(component.version_labels())?;
        self.version_node(&component.version_key(label))
    }
}
