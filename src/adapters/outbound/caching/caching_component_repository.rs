use crate::graph_analysis::domain::{Component, ComponentVersion};
use crate::ports::outbound::ComponentRepository;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::{Arc, RwLock};

/// Cache key for a loaded version
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct CacheKey {
    component: String,
    label: String,
}

impl CacheKey {
    fn new(component: &Component, label: &str) -> Self {
        Self {
            component: component.key(),
            label: label.to_string(),
        }
    }
}

/// CachingComponentRepository wraps a ComponentRepository and adds in-memory caching.
///
/// The component listing is served from cache only when the caller asks for
/// it with `use_cache = true`; a direct listing always reaches the inner
/// repository and refreshes the cached copy. Version lookups are memoized per
/// `(component, label)`, including lookups that found nothing.
pub struct CachingComponentRepository<R: ComponentRepository> {
    inner: R,
    listing: RwLock<Option<Vec<Component>>>,
    versions: Arc<DashMap<CacheKey, Option<ComponentVersion>>>,
}

impl<R: ComponentRepository> CachingComponentRepository<R> {
    /// Creates a new caching repository wrapping the given inner repository
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            listing: RwLock::new(None),
            versions: Arc::new(DashMap::new()),
        }
    }

    fn cached_listing(&self) -> Option<Vec<Component>> {
        self.listing.read().ok().and_then(|guard| guard.clone())
    }

    fn store_listing(&self, components: &[Component]) {
        if let Ok(mut guard) = self.listing.write() {
            *guard = Some(components.to_vec());
        }
    }

    /// Returns the number of memoized version lookups (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.versions.len()
    }
}

#[async_trait]
impl<R: ComponentRepository> ComponentRepository for CachingComponentRepository<R> {
    async fn list_components(&self, use_cache: bool) -> Result<Vec<Component>> {
        if use_cache {
            if let Some(components) = self.cached_listing() {
                return Ok(components);
            }
        }

        let components = self.inner.list_components(use_cache).await?;
        self.store_listing(&components);
        Ok(components)
    }

    async fn load_version(
        &self,
        component: &Component,
        label: &str,
    ) -> Result<Option<ComponentVersion>> {
        let key = CacheKey::new(component, label);

        if let Some(cached) = self.versions.get(&key) {
            return Ok(cached.clone());
        }

        // Errors are never cached
        let version = self.inner.load_version(component, label).await?;
        self.versions.insert(key, version.clone());

        Ok(version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_analysis::domain::{ComponentId, VersionRef};
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Mock repository for testing that tracks call counts
    struct MockComponentRepository {
        components: Mutex<Vec<Component>>,
        list_calls: AtomicUsize,
        load_calls: AtomicUsize,
    }

    impl MockComponentRepository {
        fn new() -> Self {
            Self {
                components: Mutex::new(vec![component("scope/a", &["1.0.0", "2.0.0"])]),
                list_calls: AtomicUsize::new(0),
                load_calls: AtomicUsize::new(0),
            }
        }

        fn replace_components(&self, components: Vec<Component>) {
            *self.components.lock().unwrap() = components;
        }
    }

    #[async_trait]
    impl ComponentRepository for MockComponentRepository {
        async fn list_components(&self, _use_cache: bool) -> Result<Vec<Component>> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.components.lock().unwrap().clone())
        }

        async fn load_version(
            &self,
            _component: &Component,
            label: &str,
        ) -> Result<Option<ComponentVersion>> {
            self.load_calls.fetch_add(1, Ordering::SeqCst);
            if label == "broken" {
                anyhow::bail!("object store unavailable");
            }
            if label == "1.0.0" {
                Ok(Some(ComponentVersion::new(label.to_string(), vec![])))
            } else {
                Ok(None)
            }
        }
    }

    fn component(id: &str, labels: &[&str]) -> Component {
        let versions: BTreeMap<String, VersionRef> = labels
            .iter()
            .map(|label| (label.to_string(), VersionRef::new(format!("{}-{}", id, label))))
            .collect();
        Component::new(ComponentId::parse(id).unwrap(), versions)
    }

    #[tokio::test]
    async fn test_cached_listing_served_when_requested() {
        let repository = CachingComponentRepository::new(MockComponentRepository::new());

        repository.list_components(true).await.unwrap();
        repository.list_components(true).await.unwrap();

        assert_eq!(repository.inner.list_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_direct_listing_bypasses_and_refreshes_cache() {
        let repository = CachingComponentRepository::new(MockComponentRepository::new());
        repository.list_components(true).await.unwrap();

        repository
            .inner
            .replace_components(vec![component("scope/b", &["1.0.0"])]);

        let stale = repository.list_components(true).await.unwrap();
        assert_eq!(stale[0].key(), "scope/a");

        let fresh = repository.list_components(false).await.unwrap();
        assert_eq!(fresh[0].key(), "scope/b");
        assert_eq!(repository.inner.list_calls.load(Ordering::SeqCst), 2);

        let cached = repository.list_components(true).await.unwrap();
        assert_eq!(cached[0].key(), "scope/b");
        assert_eq!(repository.inner.list_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_load_version_memoized() {
        let repository = CachingComponentRepository::new(MockComponentRepository::new());
        let component = component("scope/a", &["1.0.0", "2.0.0"]);

        let first = repository.load_version(&component, "1.0.0").await.unwrap();
        let second = repository.load_version(&component, "1.0.0").await.unwrap();

        assert_eq!(first.unwrap().label(), "1.0.0");
        assert_eq!(second.unwrap().label(), "1.0.0");
        assert_eq!(repository.inner.load_calls.load(Ordering::SeqCst), 1);
        assert_eq!(repository.cache_size(), 1);
    }

    #[tokio::test]
    async fn test_missing_version_memoized() {
        let repository = CachingComponentRepository::new(MockComponentRepository::new());
        let component = component("scope/a", &["1.0.0", "2.0.0"]);

        assert!(repository
            .load_version(&component, "2.0.0")
            .await
            .unwrap()
            .is_none());
        assert!(repository
            .load_version(&component, "2.0.0")
            .await
            .unwrap()
            .is_none());
        assert_eq!(repository.inner.load_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_versions_cached_per_component() {
        let repository = CachingComponentRepository::new(MockComponentRepository::new());
        let a = component("scope/a", &["1.0.0"]);
        let b = component("scope/b", &["1.0.0"]);

        repository.load_version(&a, "1.0.0").await.unwrap();
        repository.load_version(&b, "1.0.0").await.unwrap();

        assert_eq!(repository.inner.load_calls.load(Ordering::SeqCst), 2);
        assert_eq!(repository.cache_size(), 2);
    }

    #[tokio::test]
    async fn test_errors_not_cached() {
        let repository = CachingComponentRepository::new(MockComponentRepository::new());
        let component = component("scope/a", &["broken"]);

        assert!(repository.load_version(&component, "broken").await.is_err());
        assert!(repository.load_version(&component, "broken").await.is_err());

        assert_eq!(repository.inner.load_calls.load(Ordering::SeqCst), 2);
        assert_eq!(repository.cache_size(), 0);
    }
}
