use crate::graph_analysis::domain::{ComponentId, DependencyGraph};
use std::collections::{BTreeMap, BTreeSet};

/// Canonical identifier key mapped to the node keys that directly require it
pub type DependentsMap = BTreeMap<String, Vec<String>>;

/// DependentsFinder service answering reverse-dependency (impact) queries
///
/// A non-empty entry for an identifier means some version in the scope
/// still requires it.
pub struct DependentsFinder;

impl DependentsFinder {
    /// Finds the direct dependents of every identifier in `ids`
    ///
    /// Identifiers requesting the latest version are component-level
    /// queries: dependents of every loaded version are unioned and recorded
    /// under the without-version key. Specific versions are recorded under
    /// the with-version key. Entries for a repeated key are concatenated.
    /// Identifiers with no dependents get no entry.
    pub fn find(graph: &DependencyGraph, ids: &[ComponentId]) -> DependentsMap {
        let mut dependents = DependentsMap::new();

        for id in ids {
            let (key, found) = if id.is_latest() {
                let component_key = id.to_string_without_version();
                let found = Self::component_dependents(graph, &component_key);
                (component_key, found)
            } else {
                let version_key = id.to_string_with_version();
                let found = Self::version_dependents(graph, &version_key);
                (version_key, found)
            };

            if !found.is_empty() {
                dependents.entry(key).or_default().extend(found);
            }
        }

        dependents
    }

    fn version_dependents(graph: &DependencyGraph, version_key: &str) -> BTreeSet<String> {
        graph
            .predecessors(version_key)
            .map(str::to_string)
            .collect()
    }

    fn component_dependents(graph: &DependencyGraph, component_key: &str) -> BTreeSet<String> {
        graph
            .children(component_key)
            .flat_map(|child| graph.predecessors(child))
            .map(str::to_string)
            .collect()
    }
}
