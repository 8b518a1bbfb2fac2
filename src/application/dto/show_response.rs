use crate::application::read_models::{ComponentView, ReportMetadata, VersionView};
use serde::Serialize;

/// ShowResponse - result of a component/version lookup
#[derive(Debug, Clone, Serialize)]
pub struct ShowResponse {
    pub metadata: ReportMetadata,
    /// The identifier as queried
    pub query: String,
    /// The component node, if registered
    pub component: Option<ComponentView>,
    /// Resolved versions (one, or all with `all_versions`)
    pub versions: Vec<VersionView>,
}

impl ShowResponse {
    pub fn new(
        metadata: ReportMetadata,
        query: String,
        component: Option<ComponentView>,
        versions: Vec<VersionView>,
    ) -> Self {
        Self {
            metadata,
            query,
            component,
            versions,
        }
    }

    /// True when the component exists and at least one version resolved
    pub fn is_found(&self) -> bool {
        self.component.is_some() && !self.versions.is_empty()
    }
}
