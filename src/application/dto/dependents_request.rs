/// DependentsRequest - request DTO for the reverse-dependency query
#[derive(Debug, Clone)]
pub struct DependentsRequest {
    /// Identifier strings such as `scope/a` or `scope/a@1.0.0`
    pub ids: Vec<String>,
}

impl DependentsRequest {
    pub fn new(ids: Vec<String>) -> Self {
        Self { ids }
    }
}
