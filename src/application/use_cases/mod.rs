/// Use cases module containing application business logic orchestration
mod load_graph;
mod query_graph;

pub use load_graph::{GraphLoadOptions, LoadGraphUseCase, DEFAULT_MAX_CONCURRENT_FETCHES};
pub use query_graph::QueryGraphUseCase;
