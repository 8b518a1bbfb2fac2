/// ShowRequest - request DTO for component/version lookup
#[derive(Debug, Clone)]
pub struct ShowRequest {
    /// Identifier string; without a version (or with `@latest`) the latest
    /// version is resolved
    pub id: String,
    /// List every loaded version instead of a single one
    pub all_versions: bool,
}

impl ShowRequest {
    pub fn new(id: String, all_versions: bool) -> Self {
        Self { id, all_versions }
    }
}
