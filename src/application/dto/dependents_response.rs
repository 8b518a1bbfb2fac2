use crate::application::read_models::ReportMetadata;
use crate::graph_analysis::services::DependentsMap;
use serde::Serialize;

/// DependentsResponse - result of a reverse-dependency query
///
/// `dependents` only has entries for identifiers something still requires.
#[derive(Debug, Clone, Serialize)]
pub struct DependentsResponse {
    pub metadata: ReportMetadata,
    /// Canonical keys that were queried, in request order
    pub queried: Vec<String>,
    pub dependents: DependentsMap,
}

impl DependentsResponse {
    pub fn new(metadata: ReportMetadata, queried: Vec<String>, dependents: DependentsMap) -> Self {
        Self {
            metadata,
            queried,
            dependents,
        }
    }

    /// True when at least one queried identifier is still required
    pub fn has_dependents(&self) -> bool {
        !self.dependents.is_empty()
    }
}
