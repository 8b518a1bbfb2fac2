//! scope-graph - dependency graph queries over a scope of versioned components
//!
//! This library loads every component and version of a scope into an
//! in-memory compound graph and answers lookups and reverse-dependency
//! ("who still depends on this?") queries, following hexagonal architecture
//! and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`graph_analysis`): Graph model, identifiers, latest-version policy
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use scope_graph::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<()> {
//! // Create adapters
//! let repository = FileSystemScopeRepository::new(PathBuf::from("./scope"));
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Load the graph
//! let graph = LoadGraphUseCase::new(repository, progress_reporter, GraphLoadOptions::default())
//!     .execute()
//!     .await?;
//!
//! // Query it
//! let query = QueryGraphUseCase::new(graph);
//! let response = query.find_dependents(DependentsRequest::new(vec!["scope/b@1.0.0".into()]))?;
//!
//! // Format output
//! let output = JsonFormatter::new().format_dependents(&response)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod graph_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::caching::CachingComponentRepository;
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemScopeRepository, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{
        DependentsRequest, DependentsResponse, OutputFormat, ShowRequest, ShowResponse,
    };
    pub use crate::application::read_models::{ComponentView, ReportMetadata, VersionView};
    pub use crate::application::use_cases::{
        GraphLoadOptions, LoadGraphUseCase, QueryGraphUseCase,
    };
    pub use crate::graph_analysis::domain::{
        Component, ComponentId, ComponentVersion, DependencyGraph, EdgeKind, VersionRef,
    };
    pub use crate::graph_analysis::policies::LatestVersionPolicy;
    pub use crate::graph_analysis::services::{
        ComponentContribution, DependentsFinder, DependentsMap, GraphAssembler,
    };
    pub use crate::ports::inbound::GraphQueryPort;
    pub use crate::ports::outbound::{
        ComponentRepository, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::error::GraphError;
    pub use crate::shared::Result;
}
