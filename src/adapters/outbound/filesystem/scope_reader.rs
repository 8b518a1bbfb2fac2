use crate::graph_analysis::domain::{Component, ComponentId, ComponentVersion, VersionRef, LATEST};
use crate::ports::outbound::ComponentRepository;
use crate::shared::error::GraphError;
use crate::shared::security::{read_regular_file, validate_object_ref};
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Name of the component index inside a scope directory
pub const SCOPE_INDEX_FILENAME: &str = "scope.toml";
/// Directory holding one TOML object per version reference
pub const OBJECTS_DIRNAME: &str = "objects";

#[derive(Debug, Deserialize)]
struct ScopeIndex {
    #[serde(default)]
    components: Vec<ComponentEntry>,
}

#[derive(Debug, Deserialize)]
struct ComponentEntry {
    id: String,
    #[serde(default)]
    versions: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct VersionObject {
    #[serde(default)]
    flattened_dependencies: Vec<String>,
    #[serde(default)]
    flattened_dev_dependencies: Vec<String>,
    message: Option<String>,
}

/// FileSystemScopeRepository adapter for scopes stored on disk
///
/// A scope directory holds `scope.toml` (the component index) and an
/// `objects/` directory with one `<ref>.toml` per materialized version.
/// Every `list_components` call re-reads the index.
pub struct FileSystemScopeRepository {
    scope_path: PathBuf,
}

impl FileSystemScopeRepository {
    pub fn new(scope_path: PathBuf) -> Self {
        Self { scope_path }
    }

    fn index_path(&self) -> PathBuf {
        self.scope_path.join(SCOPE_INDEX_FILENAME)
    }

    fn object_path(&self, reference: &VersionRef) -> PathBuf {
        self.scope_path
            .join(OBJECTS_DIRNAME)
            .join(format!("{}.toml", reference.as_str()))
    }

    fn read_index(&self) -> Result<Vec<Component>> {
        let index_path = self.index_path();

        if fs::symlink_metadata(&index_path).is_err() {
            return Err(GraphError::ScopeNotFound {
                path: index_path,
                suggestion: format!(
                    "scope.toml does not exist in scope directory \"{}\".\n   \
                     Please specify the scope directory with the --path option.",
                    self.scope_path.display()
                ),
            }
            .into());
        }

        let content = read_regular_file(&index_path, SCOPE_INDEX_FILENAME).map_err(|e| {
            GraphError::ScopeParseError {
                path: index_path.clone(),
                details: e.to_string(),
            }
        })?;

        let index: ScopeIndex =
            toml::from_str(&content).map_err(|e| GraphError::ScopeParseError {
                path: index_path.clone(),
                details: e.to_string(),
            })?;

        let mut seen = HashSet::new();
        let mut components = Vec::with_capacity(index.components.len());
        for entry in index.components {
            let id = ComponentId::parse(&entry.id).map_err(|e| GraphError::ScopeParseError {
                path: index_path.clone(),
                details: format!("component '{}': {}", entry.id, e),
            })?;

            if id.version().is_some() {
                return Err(GraphError::ScopeParseError {
                    path: index_path,
                    details: format!(
                        "component '{}' must be declared without a version",
                        entry.id
                    ),
                }
                .into());
            }

            if !seen.insert(id.to_string_without_version()) {
                return Err(GraphError::ScopeParseError {
                    path: index_path,
                    details: format!("component '{}' is declared more than once", entry.id),
                }
                .into());
            }

            let versions = entry
                .versions
                .into_iter()
                .map(|(label, reference)| (label, VersionRef::new(reference)))
                .collect();
            components.push(Component::new(id, versions));
        }

        Ok(components)
    }

    fn read_object(&self, label: &str, reference: &VersionRef) -> Result<Option<ComponentVersion>> {
        validate_object_ref(reference.as_str()).map_err(|e| GraphError::SecurityError {
            path: self.scope_path.join(OBJECTS_DIRNAME),
            reason: e.to_string(),
            hint: "Object references in scope.toml must be plain file names".to_string(),
        })?;

        let object_path = self.object_path(reference);
        match fs::symlink_metadata(&object_path) {
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            _ => {}
        }

        let parse_error = |details: String| GraphError::ObjectParseError {
            path: object_path.clone(),
            details,
        };

        let content = read_regular_file(&object_path, "version object")
            .map_err(|e| parse_error(e.to_string()))?;
        let object: VersionObject =
            toml::from_str(&content).map_err(|e| parse_error(e.to_string()))?;

        let dependencies = parse_dependency_ids(&object.flattened_dependencies)
            .map_err(|e| parse_error(e.to_string()))?;
        let dev_dependencies = parse_dependency_ids(&object.flattened_dev_dependencies)
            .map_err(|e| parse_error(e.to_string()))?;

        Ok(Some(
            ComponentVersion::new(label.to_string(), dependencies)
                .with_dev_dependencies(dev_dependencies)
                .with_message(object.message),
        ))
    }
}

/// Parses flattened dependency identifiers; each must name an explicit version
fn parse_dependency_ids(ids: &[String]) -> Result<Vec<ComponentId>> {
    ids.iter()
        .map(|raw| {
            let id = ComponentId::parse(raw)?;
            if id.version().is_none() {
                anyhow::bail!("dependency '{}' does not specify a version", raw);
            }
            if id.is_latest() {
                anyhow::bail!(
                    "dependency '{}' must name a concrete version, not '{}'",
                    raw,
                    LATEST
                );
            }
            Ok(id)
        })
        .collect()
}

#[async_trait]
impl ComponentRepository for FileSystemScopeRepository {
    async fn list_components(&self, _use_cache: bool) -> Result<Vec<Component>> {
        self.read_index()
    }

    async fn load_version(
        &self,
        component: &Component,
        label: &str,
    ) -> Result<Option<ComponentVersion>> {
        match component.version_ref(label) {
            Some(reference) => self.read_object(label, reference),
            None => Ok(None),
        }
    }
}
