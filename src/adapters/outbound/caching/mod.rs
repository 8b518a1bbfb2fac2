/// Caching decorators for outbound repositories
mod caching_component_repository;

pub use caching_component_repository::CachingComponentRepository;
