use super::ComponentId;
use std::collections::BTreeMap;

/// Reference to where a materialized version lives in the repository
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionRef(String);

impl VersionRef {
    pub fn new(reference: String) -> Self {
        Self(reference)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VersionRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Component entity owning its declared versions
///
/// Identity is the identifier without version. The version map holds
/// stubs only; materializing a version goes through the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    id: ComponentId,
    versions: BTreeMap<String, VersionRef>,
}

impl Component {
    pub fn new(id: ComponentId, versions: BTreeMap<String, VersionRef>) -> Self {
        Self {
            id: id.without_version(),
            versions,
        }
    }

    pub fn id(&self) -> &ComponentId {
        &self.id
    }

    pub fn versions(&self) -> &BTreeMap<String, VersionRef> {
        &self.versions
    }

    /// Declared version labels in map order
    pub fn version_labels(&self) -> impl Iterator<Item = &str> {
        self.versions.keys().map(String::as_str)
    }

    pub fn version_ref(&self, label: &str) -> Option<&VersionRef> {
        self.versions.get(label)
    }

    /// Graph key of the component node
    pub fn key(&self) -> String {
        self.id.to_string_without_version()
    }

    /// Graph key of one of this component's version nodes
    pub fn version_key(&self, label: &str) -> String {
        self.id.with_version(label).to_string_with_version()
    }
}
