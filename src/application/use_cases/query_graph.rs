use crate::application::dto::{DependentsRequest, DependentsResponse, ShowRequest, ShowResponse};
use crate::application::read_models::{ReportMetadata, VersionView, ViewBuilder};
use crate::graph_analysis::domain::{ComponentId, DependencyGraph};
use crate::graph_analysis::services::DependentsFinder;
use crate::ports::inbound::GraphQueryPort;
use crate::shared::error::GraphError;
use crate::shared::Result;

/// QueryGraphUseCase - read-only queries over a loaded graph
///
/// Owns the graph produced by `LoadGraphUseCase`; nothing mutates it
/// afterwards.
pub struct QueryGraphUseCase {
    graph: DependencyGraph,
}

impl QueryGraphUseCase {
    pub fn new(graph: DependencyGraph) -> Self {
        Self { graph }
    }

    fn parse_id(id: &str) -> Result<ComponentId> {
        ComponentId::parse(id).map_err(|e| {
            GraphError::InvalidComponentId {
                id: id.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Canonical key a query for `id` is reported under
    fn query_key(id: &ComponentId) -> String {
        if id.is_latest() {
            id.to_string_without_version()
        } else {
            id.to_string_with_version()
        }
    }
}

impl GraphQueryPort for QueryGraphUseCase {
    fn find_dependents(&self, request: DependentsRequest) -> Result<DependentsResponse> {
        let ids = request
            .ids
            .iter()
            .map(|id| Self::parse_id(id))
            .collect::<Result<Vec<_>>>()?;

        let queried = ids.iter().map(Self::query_key).collect();
        let dependents = DependentsFinder::find(&self.graph, &ids);

        Ok(DependentsResponse::new(
            ReportMetadata::generate_default(),
            queried,
            dependents,
        ))
    }

    fn show(&self, request: ShowRequest) -> Result<ShowResponse> {
        let id = Self::parse_id(&request.id)?;

        let component = self
            .graph
            .get_component(&id)
            .map(|component| ViewBuilder::component(&self.graph, component));

        let versions: Vec<VersionView> = if request.all_versions {
            self.graph
                .get_component_versions(&id)
                .unwrap_or_default()
                .into_iter()
                .filter_map(|version| ViewBuilder::version(&self.graph, version))
                .collect()
        } else {
            self.graph
                .get_component_version(&id)
                .and_then(|version| ViewBuilder::version(&self.graph, version))
                .into_iter()
                .collect()
        };

        Ok(ShowResponse::new(
            ReportMetadata::generate_default(),
            request.id,
            component,
            versions,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_analysis::domain::{Component, ComponentVersion, VersionRef};
    use crate::graph_analysis::services::{ComponentContribution, GraphAssembler};
    use std::collections::BTreeMap;

    fn id(s: &str) -> ComponentId {
        ComponentId::parse(s).unwrap()
    }

    fn use_case() -> QueryGraphUseCase {
        let mut a_versions = BTreeMap::new();
        a_versions.insert("1.0.0".to_string(), VersionRef::new("a1".to_string()));
        a_versions.insert("2.0.0".to_string(), VersionRef::new("a2".to_string()));
        let mut b_versions = BTreeMap::new();
        b_versions.insert("1.0.0".to_string(), VersionRef::new("b1".to_string()));

        let graph = GraphAssembler::assemble(
            vec![
                ComponentContribution::new(
                    Component::new(id("scope/a"), a_versions),
                    vec![
                        (
                            "1.0.0".to_string(),
                            ComponentVersion::new("1.0.0".to_string(), vec![]),
                        ),
                        (
                            "2.0.0".to_string(),
                            ComponentVersion::new("2.0.0".to_string(), vec![id("scope/b@1.0.0")]),
                        ),
                    ],
                ),
                ComponentContribution::new(
                    Component::new(id("scope/b"), b_versions),
                    vec![(
                        "1.0.0".to_string(),
                        ComponentVersion::new("1.0.0".to_string(), vec![]),
                    )],
                ),
            ],
            false,
        )
        .unwrap();
        QueryGraphUseCase::new(graph)
    }

    #[test]
    fn test_find_dependents_scenario() {
        let response = use_case()
            .find_dependents(DependentsRequest::new(vec!["scope/b@1.0.0".to_string()]))
            .unwrap();

        assert!(response.has_dependents());
        assert_eq!(response.queried, vec!["scope/b@1.0.0"]);
        assert_eq!(response.dependents.len(), 1);
        assert_eq!(response.dependents["scope/b@1.0.0"], vec!["scope/a@2.0.0"]);
    }

    #[test]
    fn test_find_dependents_latest_key_is_without_version() {
        let response = use_case()
            .find_dependents(DependentsRequest::new(vec!["scope/b".to_string()]))
            .unwrap();
        assert_eq!(response.queried, vec!["scope/b"]);
        assert_eq!(response.dependents["scope/b"], vec!["scope/a@2.0.0"]);
    }

    #[test]
    fn test_find_dependents_nothing_depends() {
        let response = use_case()
            .find_dependents(DependentsRequest::new(vec!["scope/a@latest".to_string()]))
            .unwrap();
        assert!(!response.has_dependents());
        assert!(response.dependents.is_empty());
    }

    #[test]
    fn test_find_dependents_invalid_id() {
        let result = use_case().find_dependents(DependentsRequest::new(vec![
            "scope/b@1.0.0".to_string(),
            "scope/@".to_string(),
        ]));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid component identifier"));
    }

    #[test]
    fn test_show_latest() {
        let response = use_case()
            .show(ShowRequest::new("scope/a@latest".to_string(), false))
            .unwrap();

        assert!(response.is_found());
        assert_eq!(response.component.as_ref().unwrap().id, "scope/a");
        assert_eq!(response.versions.len(), 1);
        assert_eq!(response.versions[0].id, "scope/a@2.0.0");
    }

    #[test]
    fn test_show_all_versions() {
        let response = use_case()
            .show(ShowRequest::new("scope/a".to_string(), true))
            .unwrap();
        let ids: Vec<&str> = response.versions.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["scope/a@1.0.0", "scope/a@2.0.0"]);
    }

    #[test]
    fn test_show_unknown_component() {
        let response = use_case()
            .show(ShowRequest::new("scope/nope".to_string(), true))
            .unwrap();
        assert!(!response.is_found());
        assert!(response.component.is_none());
        assert!(response.versions.is_empty());
    }

    #[test]
    fn test_show_unknown_version() {
        let response = use_case()
            .show(ShowRequest::new("scope/a@9.9.9".to_string(), false))
            .unwrap();
        assert!(response.component.is_some());
        assert!(!response.is_found());
    }
}
