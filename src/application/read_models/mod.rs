//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized, serializable representation of graph nodes.

pub mod component_view;
pub mod report_metadata;
pub mod view_builder;

pub use component_view::{ComponentView, VersionView};
pub use report_metadata::ReportMetadata;
pub use view_builder::ViewBuilder;
