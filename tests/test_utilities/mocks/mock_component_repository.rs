use async_trait::async_trait;
use scope_graph::prelude::*;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Mock ComponentRepository for testing
///
/// Versions are registered per component; a version declared with
/// `without_data` is listed but has no materialized object.
#[derive(Default)]
pub struct MockComponentRepository {
    components: Vec<Component>,
    objects: HashMap<String, ComponentVersion>,
    failing_refs: HashSet<String>,
    list_failure: Option<String>,
    pub list_calls: Mutex<Vec<bool>>,
    pub load_calls: AtomicUsize,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
}

impl MockComponentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn reference(component: &str, label: &str) -> String {
        format!("{}@{}", component, label)
    }

    fn declare(&mut self, component: &str, label: &str) {
        let id = ComponentId::parse(component).unwrap();
        let reference = VersionRef::new(Self::reference(component, label));

        if let Some(existing) = self.components.iter_mut().find(|c| c.key() == component) {
            let mut versions: BTreeMap<String, VersionRef> = existing.versions().clone();
            versions.insert(label.to_string(), reference);
            *existing = Component::new(id, versions);
        } else {
            let mut versions = BTreeMap::new();
            versions.insert(label.to_string(), reference);
            self.components.push(Component::new(id, versions));
        }
    }

    /// Registers a component without any versions
    pub fn with_component(mut self, component: &str) -> Self {
        if !self.components.iter().any(|c| c.key() == component) {
            self.components.push(Component::new(
                ComponentId::parse(component).unwrap(),
                BTreeMap::new(),
            ));
        }
        self
    }

    /// Declares and materializes a version with the given flattened dependencies
    pub fn with_version(mut self, component: &str, label: &str, dependencies: &[&str]) -> Self {
        self.declare(component, label);
        let dependencies = dependencies
            .iter()
            .map(|d| ComponentId::parse(d).unwrap())
            .collect();
        self.objects.insert(
            Self::reference(component, label),
            ComponentVersion::new(label.to_string(), dependencies),
        );
        self
    }

    /// Declares and materializes a version with runtime and dev dependencies
    pub fn with_dev_version(
        mut self,
        component: &str,
        label: &str,
        dependencies: &[&str],
        dev_dependencies: &[&str],
    ) -> Self {
        self = self.with_version(component, label, dependencies);
        let key = Self::reference(component, label);
        let dev = dev_dependencies
            .iter()
            .map(|d| ComponentId::parse(d).unwrap())
            .collect();
        if let Some(version) = self.objects.remove(&key) {
            self.objects.insert(key, version.with_dev_dependencies(dev));
        }
        self
    }

    /// Declares a version whose object is missing
    pub fn without_data(mut self, component: &str, label: &str) -> Self {
        self.declare(component, label);
        self
    }

    /// Makes loading the given version fail
    pub fn failing_on(mut self, component: &str, label: &str) -> Self {
        self.failing_refs.insert(Self::reference(component, label));
        self
    }

    /// Makes listing fail
    pub fn failing_list(mut self, message: &str) -> Self {
        self.list_failure = Some(message.to_string());
        self
    }

    pub fn load_count(&self) -> usize {
        self.load_calls.load(Ordering::SeqCst)
    }

    pub fn peak_concurrency(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ComponentRepository for MockComponentRepository {
    async fn list_components(&self, use_cache: bool) -> Result<Vec<Component>> {
        self.list_calls.lock().unwrap().push(use_cache);
        if let Some(message) = &self.list_failure {
            anyhow::bail!("{}", message);
        }
        Ok(self.components.clone())
    }

    async fn load_version(
        &self,
        component: &Component,
        label: &str,
    ) -> Result<Option<ComponentVersion>> {
        self.load_calls.fetch_add(1, Ordering::SeqCst);
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        let Some(reference) = component.version_ref(label) else {
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            return Ok(None);
        };
        let reference = reference.as_str().to_string();

        // Let sibling fetches start before this one completes
        tokio::task::yield_now().await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing_refs.contains(&reference) {
            anyhow::bail!("object store unavailable for {}", reference);
        }
        Ok(self.objects.get(&reference).cloned())
    }
}
