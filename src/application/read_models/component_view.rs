//! View structs for component and version lookups
//!
//! These structs provide a flattened, serializable view of graph nodes.

use serde::Serialize;

/// View representation of a component node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentView {
    /// Identifier without version
    pub id: String,
    /// Declared version labels, in declared-label order
    pub declared_versions: Vec<String>,
    /// Declared labels that were loaded into the graph
    pub loaded_versions: Vec<String>,
    /// Label the latest sentinel resolves to, if any
    pub latest: Option<String>,
}

/// View representation of a version node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionView {
    /// Identifier with version
    pub id: String,
    /// Version label
    pub version: String,
    /// Flattened runtime dependencies
    pub dependencies: Vec<String>,
    /// Flattened development dependencies
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dev_dependencies: Vec<String>,
    /// Version nodes that directly require this one
    pub dependents: Vec<String>,
    /// Log message recorded with the version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
