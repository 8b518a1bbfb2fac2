use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

/// Metadata stamped on every report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportMetadata {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub report_id: String,
}

impl ReportMetadata {
    /// Generates metadata with the current timestamp and a fresh report id
    pub fn generate(tool_name: &str, tool_version: &str) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            tool_name: tool_name.to_string(),
            tool_version: tool_version.to_string(),
            report_id: format!("urn:uuid:{}", Uuid::new_v4()),
        }
    }

    /// Generates metadata for this tool, using the compile-time version
    pub fn generate_default() -> Self {
        Self::generate("scope-graph", env!("CARGO_PKG_VERSION"))
    }
}
