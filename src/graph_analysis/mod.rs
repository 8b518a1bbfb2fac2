/// Domain layer - graph model, version policies and pure graph services
///
/// Nothing in this layer performs I/O. Repository access lives behind the
/// outbound ports and is orchestrated by the application layer.
pub mod domain;
pub mod policies;
pub mod services;
