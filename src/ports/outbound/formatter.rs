use crate::application::dto::{DependentsResponse, ShowResponse};
use crate::shared::Result;

/// ReportFormatter port for rendering query results
///
/// Implementations exist for JSON and Markdown output.
pub trait ReportFormatter {
    /// Renders the result of a reverse-dependency query
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_dependents(&self, response: &DependentsResponse) -> Result<String>;

    /// Renders the result of a component/version lookup
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_show(&self, response: &ShowResponse) -> Result<String>;
}
