use crate::application::dto::{DependentsResponse, ShowResponse};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonFormatter adapter for machine-readable reports
///
/// Serializes the response DTOs as pretty-printed JSON, metadata included.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_dependents(&self, response: &DependentsResponse) -> Result<String> {
        serde_json::to_string_pretty(response).map_err(Into::into)
    }

    fn format_show(&self, response: &ShowResponse) -> Result<String> {
        serde_json::to_string_pretty(response).map_err(Into::into)
    }
}
