use super::ComponentId;

/// Materialized metadata for one version of a component
///
/// The owning identifier is stamped by the graph builder once the version
/// is loaded, so the repository does not need to know it.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentVersion {
    id: Option<ComponentId>,
    label: String,
    flattened_dependencies: Vec<ComponentId>,
    flattened_dev_dependencies: Vec<ComponentId>,
    message: Option<String>,
}

impl ComponentVersion {
    pub fn new(label: String, flattened_dependencies: Vec<ComponentId>) -> Self {
        Self {
            id: None,
            label,
            flattened_dependencies,
            flattened_dev_dependencies: Vec::new(),
            message: None,
        }
    }

    pub fn with_dev_dependencies(mut self, flattened_dev_dependencies: Vec<ComponentId>) -> Self {
        self.flattened_dev_dependencies = flattened_dev_dependencies;
        self
    }

    pub fn with_message(mut self, message: Option<String>) -> Self {
        self.message = message;
        self
    }

    /// Owning component identifier (without version), once stamped
    pub fn id(&self) -> Option<&ComponentId> {
        self.id.as_ref()
    }

    /// Stamps the owning component's identifier onto this version
    pub fn set_id(&mut self, id: &ComponentId) {
        self.id = Some(id.without_version());
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Owning identifier pinned to this version's label
    pub fn versioned_id(&self) -> Option<ComponentId> {
        self.id.as_ref().map(|id| id.with_version(&self.label))
    }

    pub fn flattened_dependencies(&self) -> &[ComponentId] {
        &self.flattened_dependencies
    }

    pub fn flattened_dev_dependencies(&self) -> &[ComponentId] {
        &self.flattened_dev_dependencies
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
