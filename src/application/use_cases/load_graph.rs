use crate::graph_analysis::domain::{Component, ComponentVersion, DependencyGraph};
use crate::graph_analysis::services::{ComponentContribution, GraphAssembler};
use crate::ports::outbound::{ComponentRepository, ProgressReporter};
use crate::shared::error::GraphError;
use crate::shared::Result;
use futures::stream::{self, StreamExt, TryStreamExt};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Default bound on in-flight version fetches
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 16;

/// Options controlling graph construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphLoadOptions {
    /// Bound on `load_version` calls in flight across the whole scope
    pub max_concurrent_fetches: usize,
    /// Add `dev-require` edges for flattened dev dependencies
    pub include_dev_dependencies: bool,
}

impl Default for GraphLoadOptions {
    fn default() -> Self {
        Self {
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
            include_dev_dependencies: false,
        }
    }
}

/// One fetch outcome: owning component index, label, loaded data
type FetchResult = (usize, String, Option<ComponentVersion>);

/// LoadGraphUseCase - builds the dependency graph of a whole scope
///
/// Components are listed with the cache bypassed, then every declared
/// version of every component is fetched through a single bounded stream.
/// Results are grouped back into one contribution per component; nodes and
/// edges are added only after all fetches have settled. A version the
/// repository has no data for is skipped. Any fetch error fails the whole
/// load and is reported through the progress reporter.
///
/// # Type Parameters
/// * `R` - ComponentRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct LoadGraphUseCase<R, PR> {
    repository: R,
    progress_reporter: PR,
    options: GraphLoadOptions,
}

impl<R, PR> LoadGraphUseCase<R, PR>
where
    R: ComponentRepository,
    PR: ProgressReporter,
{
    /// Creates a new LoadGraphUseCase with injected dependencies
    pub fn new(repository: R, progress_reporter: PR, options: GraphLoadOptions) -> Self {
        Self {
            repository,
            progress_reporter,
            options,
        }
    }

    /// Loads the graph
    ///
    /// # Errors
    /// Returns an error if listing components or fetching any version fails
    pub async fn execute(&self) -> Result<DependencyGraph> {
        match self.load().await {
            Ok(graph) => Ok(graph),
            Err(e) => {
                self.progress_reporter
                    .report_error(&format!("❌ Graph load aborted: {}", e));
                Err(e)
            }
        }
    }

    async fn load(&self) -> Result<DependencyGraph> {
        self.progress_reporter.report("📖 Listing components...");

        let components = self
            .repository
            .list_components(false)
            .await
            .map_err(|e| GraphError::ComponentListError {
                details: format!("{:#}", e),
            })?;

        let fetches: Vec<(usize, String)> = components
            .iter()
            .enumerate()
            .flat_map(|(index, component)| {
                component
                    .version_labels()
                    .map(move |label| (index, label.to_string()))
            })
            .collect();
        let total_versions = fetches.len();
        self.progress_reporter.report(&format!(
            "✅ Found {} component(s) declaring {} version(s)",
            components.len(),
            total_versions
        ));

        let fetched = AtomicUsize::new(0);
        let fetched_ref = &fetched;
        let components_ref = &components;
        let limit = self.options.max_concurrent_fetches.max(1);

        let results: Vec<FetchResult> = stream::iter(fetches)
            .map(move |(index, label)| async move {
                let component = &components_ref[index];
                let version = self
                    .repository
                    .load_version(component, &label)
                    .await
                    .map_err(|e| GraphError::VersionFetchError {
                        component: component.key(),
                        version: label.clone(),
                        details: format!("{:#}", e),
                    })?;

                let current = fetched_ref.fetch_add(1, Ordering::Relaxed) + 1;
                self.progress_reporter.report_progress(
                    current,
                    total_versions,
                    Some("Loading component versions..."),
                );

                Ok::<_, anyhow::Error>((index, label, version))
            })
            .buffer_unordered(limit)
            .try_collect()
            .await?;

        let contributions = group_by_component(components, results);
        let loaded: usize = contributions.iter().map(|c| c.versions.len()).sum();
        let graph =
            GraphAssembler::assemble(contributions, self.options.include_dev_dependencies)?;

        self.progress_reporter.report_completion(&format!(
            "✅ Graph loaded: {} component(s), {} version(s), {} edge(s), {} version(s) without data skipped",
            graph.component_count(),
            graph.version_count(),
            graph.edge_count(),
            total_versions - loaded
        ));

        Ok(graph)
    }
}

/// Regroups flat fetch results into one contribution per listed component
fn group_by_component(
    components: Vec<Component>,
    results: Vec<FetchResult>,
) -> Vec<ComponentContribution> {
    let mut grouped: Vec<Vec<(String, ComponentVersion)>> =
        components.iter().map(|_| Vec::new()).collect();
    for (index, label, version) in results {
        if let (Some(version), Some(slot)) = (version, grouped.get_mut(index)) {
            slot.push((label, version));
        }
    }

    components
        .into_iter()
        .zip(grouped)
        .map(|(component, versions)| ComponentContribution::new(component, versions))
        .collect()
}
