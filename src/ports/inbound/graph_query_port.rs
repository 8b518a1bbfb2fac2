use crate::application::dto::{DependentsRequest, DependentsResponse, ShowRequest, ShowResponse};
use crate::shared::Result;

/// GraphQueryPort - Inbound port for querying a loaded dependency graph
///
/// Absence is a normal outcome here: unknown identifiers yield empty
/// responses, not errors. Errors are reserved for malformed input.
pub trait GraphQueryPort {
    /// Finds what still requires the given identifiers
    ///
    /// # Errors
    /// Returns an error if any identifier cannot be parsed
    fn find_dependents(&self, request: DependentsRequest) -> Result<DependentsResponse>;

    /// Resolves a component, one of its versions, or all of its versions
    ///
    /// # Errors
    /// Returns an error if the identifier cannot be parsed
    fn show(&self, request: ShowRequest) -> Result<ShowResponse>;
}
