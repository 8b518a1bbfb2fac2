use crate::graph_analysis::domain::{Component, ComponentVersion};
use crate::shared::Result;
use async_trait::async_trait;

/// ComponentRepository port for reading a scope of versioned components
///
/// This port abstracts where components and their materialized versions are
/// stored (a scope directory on disk, a remote scope, an in-memory fixture).
///
/// # Async Support
/// Methods are async so graph construction can fan out version fetches.
/// Implementations must be `Send + Sync` to support concurrent access.
#[async_trait]
pub trait ComponentRepository: Send + Sync {
    /// Lists every component in the scope
    ///
    /// # Arguments
    /// * `use_cache` - Whether a cached listing may be served. Graph
    ///   construction always passes `false`.
    ///
    /// # Errors
    /// Returns an error if the scope index cannot be read or parsed
    async fn list_components(&self, use_cache: bool) -> Result<Vec<Component>>;

    /// Materializes one declared version of a component
    ///
    /// # Arguments
    /// * `component` - The component owning the version
    /// * `label` - The declared version label
    ///
    /// # Returns
    /// `Ok(None)` when the repository holds no materialized data for the
    /// label. That is not an error; the version is simply skipped.
    ///
    /// # Errors
    /// Returns an error if the version data exists but cannot be read
    async fn load_version(
        &self,
        component: &Component,
        label: &str,
    ) -> Result<Option<ComponentVersion>>;
}
